use std::cell::RefCell;
use std::collections::BTreeMap;

use geo::{Coord, Point};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use walkability_core::{
    AnalysisRequest, Category, CategoryWeight, Poi, RatingTier, ScoreReport, TimeLimit, analyze,
};

const LAT_DEG_PER_M: f64 = 1.0 / 111_194.93;

fn poi_north_of(center: Point<f64>, id: u64, category: Category, metres: f64) -> Poi {
    Poi::new(
        id,
        Coord {
            x: center.x(),
            y: center.y() + metres * LAT_DEG_PER_M,
        },
        category,
    )
}

#[fixture]
fn request() -> RefCell<AnalysisRequest> {
    RefCell::new(AnalysisRequest {
        center: Point::new(7.63, 51.96),
        time_limit: TimeLimit::new(15).expect("non-zero limit"),
        categories: Vec::new(),
        pois: BTreeMap::new(),
        isochrone: None,
    })
}

#[fixture]
fn report() -> RefCell<Option<ScoreReport>> {
    RefCell::new(None)
}

#[given("a centre with a 15 minute walking limit")]
fn given_centre(#[from(request)] request: &RefCell<AnalysisRequest>) {
    let mut request = request.borrow_mut();
    request.center = Point::new(7.63, 51.96);
    request.time_limit = TimeLimit::new(15).expect("non-zero limit");
}

#[given("a supermarket 120 m north of the centre")]
fn given_supermarket(#[from(request)] request: &RefCell<AnalysisRequest>) {
    let mut request = request.borrow_mut();
    let center = request.center;
    request
        .categories
        .push(CategoryWeight::new(Category::Supermarket, 0.2));
    request.pois.insert(
        Category::Supermarket,
        vec![poi_north_of(center, 1, Category::Supermarket, 120.0)],
    );
}

#[given("a pharmacy 600 m north of the centre")]
fn given_pharmacy(#[from(request)] request: &RefCell<AnalysisRequest>) {
    let mut request = request.borrow_mut();
    let center = request.center;
    request
        .categories
        .push(CategoryWeight::new(Category::Pharmacy, 0.2));
    request.pois.insert(
        Category::Pharmacy,
        vec![poi_north_of(center, 2, Category::Pharmacy, 600.0)],
    );
}

#[given("a pharmacy is requested but none exists nearby")]
fn given_absent_pharmacy(#[from(request)] request: &RefCell<AnalysisRequest>) {
    request
        .borrow_mut()
        .categories
        .push(CategoryWeight::new(Category::Pharmacy, 0.2));
}

#[when("I analyse the location")]
fn when_analyse(
    #[from(request)] request: &RefCell<AnalysisRequest>,
    #[from(report)] report: &RefCell<Option<ScoreReport>>,
) {
    let outcome = analyze(&request.borrow()).expect("analysis succeeds");
    *report.borrow_mut() = Some(outcome);
}

#[then("the overall score is {expected}")]
fn then_overall(expected: f64, #[from(report)] report: &RefCell<Option<ScoreReport>>) {
    let report = report.borrow();
    let report = report.as_ref().expect("analysis ran");
    assert!((report.overall() - expected).abs() <= 1e-9);
}

#[then("the location is rated good")]
fn then_rated_good(#[from(report)] report: &RefCell<Option<ScoreReport>>) {
    let report = report.borrow();
    assert_eq!(report.as_ref().expect("analysis ran").tier(), RatingTier::Good);
}

#[then("the pharmacy row reports a score of zero")]
fn then_pharmacy_zero(#[from(report)] report: &RefCell<Option<ScoreReport>>) {
    let report = report.borrow();
    let report = report.as_ref().expect("analysis ran");
    let row = report
        .results()
        .iter()
        .find(|result| result.category == Category::Pharmacy)
        .expect("pharmacy row present");
    assert_eq!(row.raw_score, 0.0);
    assert_eq!(row.poi_count, 0);
}

#[then("a recommendation mentions the pharmacy")]
fn then_recommendation(#[from(report)] report: &RefCell<Option<ScoreReport>>) {
    let report = report.borrow();
    let report = report.as_ref().expect("analysis ran");
    assert!(
        report
            .recommendations()
            .iter()
            .any(|message| message.contains("pharmacy"))
    );
}

#[scenario(path = "tests/features/walkability.feature", index = 0)]
fn well_served_centre(request: RefCell<AnalysisRequest>, report: RefCell<Option<ScoreReport>>) {
    let _ = (request, report);
}

#[scenario(path = "tests/features/walkability.feature", index = 1)]
fn absent_category(request: RefCell<AnalysisRequest>, report: RefCell<Option<ScoreReport>>) {
    let _ = (request, report);
}
