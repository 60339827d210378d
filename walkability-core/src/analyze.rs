//! Single-pass analysis pipeline from request to report.

use std::collections::BTreeMap;

use geo::{Point, Polygon};

use crate::{
    Category, CategoryWeight, EngineError, Poi, TimeLimit, geometry,
    recommend::recommend,
    report::{InputSnapshot, ScoreReport},
    resolver,
    score::{CategoryResult, aggregate, category_score},
};

/// Everything one analysis needs, assembled by the caller from collaborator
/// output.
///
/// A category present in `categories` but absent from `pois` is treated as
/// having an empty POI list; that is valid input, distinct from a fetch
/// failure (which must prevent the engine from being invoked at all).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Centre point of the analysis (WGS84).
    pub center: Point<f64>,
    /// Walking time limit.
    pub time_limit: TimeLimit,
    /// Requested categories with their weights, in request order.
    pub categories: Vec<CategoryWeight>,
    /// Per-category POI lists from the fetch collaborator.
    pub pois: BTreeMap<Category, Vec<Poi>>,
    /// Isochrone polygon from the routing collaborator, passed through into
    /// the report snapshot.
    pub isochrone: Option<Polygon<f64>>,
}

/// Run the full pipeline: resolve, score, aggregate, recommend, build.
///
/// Per-category evaluation is pure and independent; evaluation order cannot
/// affect the overall score, and the report builder re-sorts results into
/// canonical order before emitting them.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use geo::Point;
/// use walkability_core::{AnalysisRequest, Category, TimeLimit, analyze};
///
/// let request = AnalysisRequest {
///     center: Point::new(7.63, 51.96),
///     time_limit: TimeLimit::new(15)?,
///     categories: vec![Category::Pharmacy.with_default_weight()],
///     pois: BTreeMap::new(),
///     isochrone: None,
/// };
/// let report = analyze(&request)?;
/// assert_eq!(report.overall(), 0.0);
/// assert_eq!(report.recommendations().len(), 1);
/// # Ok::<(), walkability_core::EngineError>(())
/// ```
///
/// # Errors
/// Returns an [`EngineError`] for malformed coordinates, an empty requested
/// category set, or invalid configuration (zero reach, non-positive weight).
pub fn analyze(request: &AnalysisRequest) -> Result<ScoreReport, EngineError> {
    geometry::validate(request.center)?;
    if request.categories.is_empty() {
        return Err(EngineError::EmptyCategories);
    }
    let reach_m = request.time_limit.reach_m();

    let mut results = Vec::with_capacity(request.categories.len());
    for selection in &request.categories {
        let pois = request
            .pois
            .get(&selection.category)
            .map_or(&[][..], Vec::as_slice);
        results.push(evaluate_category(
            request.center,
            *selection,
            pois,
            reach_m,
        )?);
    }

    let (overall, tier) = aggregate(&results)?;
    let recommendations = recommend(&results);
    let snapshot = InputSnapshot {
        center: request.center,
        time_limit: request.time_limit,
        categories: request.categories.clone(),
        isochrone: request.isochrone.clone(),
    };
    ScoreReport::build(snapshot, results, overall, tier, recommendations)
}

fn evaluate_category(
    center: Point<f64>,
    selection: CategoryWeight,
    pois: &[Poi],
    reach_m: f64,
) -> Result<CategoryResult, EngineError> {
    let nearest = resolver::nearest(center, pois)?;
    let (nearest_poi, distance_m) = match nearest {
        Some(hit) => (Some(hit.poi), Some(hit.distance_m)),
        None => (None, None),
    };
    let raw_score = category_score(distance_m, reach_m)?;
    Ok(CategoryResult {
        category: selection.category,
        weight: selection.weight,
        poi_count: pois.len(),
        nearest: nearest_poi,
        distance_m,
        raw_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    use crate::score::RatingTier;
    use crate::test_support::poi_north_of;

    #[fixture]
    fn center() -> Point<f64> {
        Point::new(7.63, 51.96)
    }

    #[rstest]
    fn reference_scenario_scores_seventy(center: Point<f64>) {
        let mut pois = BTreeMap::new();
        pois.insert(
            Category::Supermarket,
            vec![poi_north_of(center, 1, Category::Supermarket, 120.0)],
        );
        pois.insert(
            Category::Pharmacy,
            vec![poi_north_of(center, 2, Category::Pharmacy, 600.0)],
        );
        let request = AnalysisRequest {
            center,
            time_limit: TimeLimit::new(15).unwrap(),
            categories: vec![
                CategoryWeight::new(Category::Supermarket, 0.2),
                CategoryWeight::new(Category::Pharmacy, 0.2),
            ],
            pois,
            isochrone: None,
        };

        let report = analyze(&request).unwrap();

        assert_eq!(report.overall(), 70.0);
        assert_eq!(report.tier(), RatingTier::Good);
        let raws: Vec<f64> = report.results().iter().map(|r| r.raw_score).collect();
        assert!((raws[0] - 90.0).abs() < 0.01, "supermarket raw {}", raws[0]);
        assert!((raws[1] - 50.0).abs() < 0.01, "pharmacy raw {}", raws[1]);
        assert!(report.recommendations().is_empty());
    }

    #[rstest]
    fn category_without_pois_scores_zero_and_recommends(center: Point<f64>) {
        let mut pois = BTreeMap::new();
        pois.insert(
            Category::Supermarket,
            vec![poi_north_of(center, 1, Category::Supermarket, 120.0)],
        );
        // Pharmacy requested but never inserted: empty list, valid input.
        let request = AnalysisRequest {
            center,
            time_limit: TimeLimit::new(15).unwrap(),
            categories: vec![
                CategoryWeight::new(Category::Supermarket, 0.2),
                CategoryWeight::new(Category::Pharmacy, 0.2),
            ],
            pois,
            isochrone: None,
        };

        let report = analyze(&request).unwrap();

        let pharmacy = &report.results()[1];
        assert_eq!(pharmacy.category, Category::Pharmacy);
        assert_eq!(pharmacy.raw_score, 0.0);
        assert_eq!(pharmacy.poi_count, 0);
        assert!(pharmacy.nearest.is_none());
        assert_eq!(report.recommendations().len(), 1);
        assert!(report.recommendations()[0].contains("pharmacy"));
        assert_eq!(report.overall(), 45.0);
        assert_eq!(report.tier(), RatingTier::Average);
    }

    #[rstest]
    fn empty_category_set_is_rejected(center: Point<f64>) {
        let request = AnalysisRequest {
            center,
            time_limit: TimeLimit::new(15).unwrap(),
            categories: Vec::new(),
            pois: BTreeMap::new(),
            isochrone: None,
        };
        assert_eq!(analyze(&request), Err(EngineError::EmptyCategories));
    }

    #[rstest]
    fn malformed_centre_is_rejected() {
        let request = AnalysisRequest {
            center: Point::new(7.63, f64::NAN),
            time_limit: TimeLimit::new(15).unwrap(),
            categories: vec![Category::Bank.with_default_weight()],
            pois: BTreeMap::new(),
            isochrone: None,
        };
        let err = analyze(&request).unwrap_err();
        assert!(matches!(err, EngineError::NonFiniteCoordinate { .. }));
    }

    #[rstest]
    fn request_order_does_not_change_the_overall_score(center: Point<f64>) {
        let mut pois = BTreeMap::new();
        pois.insert(
            Category::Supermarket,
            vec![poi_north_of(center, 1, Category::Supermarket, 120.0)],
        );
        pois.insert(
            Category::Bank,
            vec![poi_north_of(center, 2, Category::Bank, 900.0)],
        );
        let forward = AnalysisRequest {
            center,
            time_limit: TimeLimit::new(15).unwrap(),
            categories: vec![
                Category::Supermarket.with_default_weight(),
                Category::Bank.with_default_weight(),
            ],
            pois: pois.clone(),
            isochrone: None,
        };
        let mut reversed = forward.clone();
        reversed.categories.reverse();

        let a = analyze(&forward).unwrap();
        let b = analyze(&reversed).unwrap();

        assert_eq!(a.overall(), b.overall());
        let order: Vec<Category> = b.results().iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Supermarket, Category::Bank]);
    }
}
