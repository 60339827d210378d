//! The immutable score report and its validating builder.

use std::collections::BTreeSet;

use geo::{Point, Polygon};

use crate::{
    Category, CategoryWeight, EngineError, TimeLimit,
    score::{CategoryResult, RatingTier},
};

/// The inputs one analysis ran against, carried for traceability.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    /// Centre point of the analysis.
    pub center: Point<f64>,
    /// Walking time limit.
    pub time_limit: TimeLimit,
    /// Requested categories with the weights in effect.
    pub categories: Vec<CategoryWeight>,
    /// Isochrone polygon supplied by the routing collaborator, when present.
    ///
    /// The scoring formulas are radius-based and do not consume it; it is
    /// passed through for rendering and export.
    pub isochrone: Option<Polygon<f64>>,
}

/// A complete, immutable walkability report.
///
/// Built once per request by [`ScoreReport::build`] and never mutated;
/// downstream consumers read it through accessors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    overall: f64,
    tier: RatingTier,
    results: Vec<CategoryResult>,
    recommendations: Vec<String>,
    snapshot: InputSnapshot,
}

impl ScoreReport {
    /// Assemble a report, validating result/request consistency.
    ///
    /// Results are re-sorted into canonical category declaration order, so
    /// the output ordering is independent of how the per-category work was
    /// scheduled.
    ///
    /// # Errors
    /// Returns [`EngineError::CategoryMismatch`] when the result category
    /// set differs from the snapshot's requested set; that signals an
    /// upstream defect such as a category silently dropped during the POI
    /// fetch.
    pub fn build(
        snapshot: InputSnapshot,
        mut results: Vec<CategoryResult>,
        overall: f64,
        tier: RatingTier,
        recommendations: Vec<String>,
    ) -> Result<Self, EngineError> {
        let requested: BTreeSet<Category> =
            snapshot.categories.iter().map(|cw| cw.category).collect();
        let produced: BTreeSet<Category> = results.iter().map(|r| r.category).collect();
        if requested != produced || results.len() != snapshot.categories.len() {
            return Err(EngineError::CategoryMismatch {
                missing: requested.difference(&produced).copied().collect(),
                unexpected: produced.difference(&requested).copied().collect(),
            });
        }
        results.sort_by_key(|result| result.category);
        Ok(Self {
            overall,
            tier,
            results,
            recommendations,
            snapshot,
        })
    }

    /// Rounded overall score in `[0, 100]`.
    #[must_use]
    pub const fn overall(&self) -> f64 {
        self.overall
    }

    /// Rating band of the overall score.
    #[must_use]
    pub const fn tier(&self) -> RatingTier {
        self.tier
    }

    /// Per-category results in canonical declaration order.
    #[must_use]
    pub fn results(&self) -> &[CategoryResult] {
        &self.results
    }

    /// Recommendation strings, empty when no category needs one.
    #[must_use]
    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// The input snapshot the report was computed from.
    #[must_use]
    pub const fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    /// Total POI count across all categories.
    #[must_use]
    pub fn total_pois(&self) -> usize {
        self.results.iter().map(|result| result.poi_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn result_for(category: Category, raw_score: f64) -> CategoryResult {
        CategoryResult {
            category,
            weight: category.default_weight(),
            poi_count: 2,
            nearest: None,
            distance_m: Some(300.0),
            raw_score,
        }
    }

    #[fixture]
    fn snapshot() -> InputSnapshot {
        InputSnapshot {
            center: Point::new(7.63, 51.96),
            time_limit: TimeLimit::new(15).unwrap(),
            categories: vec![
                Category::Supermarket.with_default_weight(),
                Category::Pharmacy.with_default_weight(),
            ],
            isochrone: None,
        }
    }

    #[rstest]
    fn build_re_sorts_results_into_declaration_order(snapshot: InputSnapshot) {
        let results = vec![
            result_for(Category::Pharmacy, 50.0),
            result_for(Category::Supermarket, 90.0),
        ];
        let report =
            ScoreReport::build(snapshot, results, 70.0, RatingTier::Good, Vec::new()).unwrap();
        let order: Vec<Category> = report.results().iter().map(|r| r.category).collect();
        assert_eq!(order, vec![Category::Supermarket, Category::Pharmacy]);
        assert_eq!(report.total_pois(), 4);
    }

    #[rstest]
    fn missing_category_is_an_inconsistency(snapshot: InputSnapshot) {
        let results = vec![result_for(Category::Supermarket, 90.0)];
        let err = ScoreReport::build(snapshot, results, 90.0, RatingTier::Excellent, Vec::new())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::CategoryMismatch {
                missing: vec![Category::Pharmacy],
                unexpected: Vec::new(),
            }
        );
    }

    #[rstest]
    fn unexpected_category_is_an_inconsistency(snapshot: InputSnapshot) {
        let results = vec![
            result_for(Category::Supermarket, 90.0),
            result_for(Category::Pharmacy, 50.0),
            result_for(Category::Bank, 10.0),
        ];
        let err =
            ScoreReport::build(snapshot, results, 50.0, RatingTier::Average, Vec::new())
                .unwrap_err();
        assert!(matches!(err, EngineError::CategoryMismatch { ref unexpected, .. }
            if unexpected == &vec![Category::Bank]));
    }
}
