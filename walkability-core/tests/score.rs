use rstest::rstest;
use walkability_core::{
    Category, CategoryResult, EngineError, RatingTier, aggregate, category_score,
};

const TOLERANCE: f64 = 1e-9;

fn result(category: Category, raw_score: f64, weight: f64) -> CategoryResult {
    CategoryResult {
        category,
        weight,
        poi_count: 1,
        nearest: None,
        distance_m: None,
        raw_score,
    }
}

#[rstest]
#[case(Some(0.0), 1200.0, 100.0)]
#[case(Some(300.0), 1200.0, 75.0)]
#[case(Some(600.0), 1200.0, 50.0)]
#[case(Some(1199.9), 1200.0, 0.008_333)]
#[case(Some(1200.0), 1200.0, 0.0)]
// Beyond reach clamps to zero rather than going negative.
#[case(Some(5000.0), 1200.0, 0.0)]
#[case(None, 1200.0, 0.0)]
#[case(None, 400.0, 0.0)]
// A five-minute limit: 400 m reach.
#[case(Some(100.0), 400.0, 75.0)]
fn score_scenarios(#[case] distance_m: Option<f64>, #[case] reach_m: f64, #[case] expected: f64) {
    let raw = category_score(distance_m, reach_m).expect("valid reach");
    assert!(raw.is_finite(), "score must be finite");
    assert!((0.0..=100.0).contains(&raw), "score must be within [0, 100]");
    assert!((raw - expected).abs() <= 1e-4, "got {raw}, want {expected}");
}

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NEG_INFINITY)]
#[case(f64::NAN)]
fn score_rejects_degenerate_reach(#[case] reach_m: f64) {
    let err = category_score(Some(50.0), reach_m).expect_err("degenerate reach");
    assert!(matches!(err, EngineError::NonPositiveReach { .. }));
}

#[rstest]
fn aggregate_weights_do_not_need_to_sum_to_one() {
    let results = vec![
        result(Category::Supermarket, 90.0, 2.0),
        result(Category::Pharmacy, 50.0, 2.0),
    ];
    let (overall, tier) = aggregate(&results).expect("valid results");
    assert!((overall - 70.0).abs() <= TOLERANCE);
    assert_eq!(tier, RatingTier::Good);
}

#[rstest]
fn aggregate_of_empty_results_is_invalid_input() {
    let err = aggregate(&[]).expect_err("empty results");
    assert_eq!(err, EngineError::EmptyResults);
    assert_eq!(err.kind(), walkability_core::ErrorKind::InvalidInput);
}

#[rstest]
#[case(80.4, RatingTier::Excellent)]
#[case(79.6, RatingTier::Excellent)]
#[case(79.4, RatingTier::Good)]
#[case(60.0, RatingTier::Good)]
#[case(59.5, RatingTier::Good)]
#[case(59.4, RatingTier::Average)]
#[case(40.0, RatingTier::Average)]
#[case(39.4, RatingTier::Poor)]
fn tier_is_looked_up_on_the_rounded_overall(#[case] raw: f64, #[case] expected: RatingTier) {
    let results = vec![result(Category::Doctor, raw, 1.0)];
    let (_, tier) = aggregate(&results).expect("valid results");
    assert_eq!(tier, expected);
}
