//! Sub-score formula, weighted aggregation and rating tiers.
//!
//! The sub-score formula is the documented, user-facing contract:
//! `100 * (1 - distance / reach)`, clamped to `[0, 100]`, with an absent POI
//! scoring zero. Clamping happens per category before weighting; only the
//! final weighted mean is rounded, and the tier is looked up on the rounded
//! value.

use crate::{Category, EngineError, Poi};

/// Outcome of scoring one requested category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryResult {
    /// The scored category.
    pub category: Category,
    /// Weight used during aggregation.
    pub weight: f64,
    /// Number of POIs the collaborator supplied for the category.
    pub poi_count: usize,
    /// Closest POI, absent when none was found.
    pub nearest: Option<Poi>,
    /// Distance to the closest POI in metres, absent when none was found.
    pub distance_m: Option<f64>,
    /// Raw sub-score in `[0, 100]`.
    pub raw_score: f64,
}

/// Convert a nearest-POI distance into a raw sub-score.
///
/// # Examples
/// ```
/// use walkability_core::category_score;
///
/// assert_eq!(category_score(Some(0.0), 1200.0)?, 100.0);
/// assert_eq!(category_score(Some(600.0), 1200.0)?, 50.0);
/// assert_eq!(category_score(None, 1200.0)?, 0.0);
/// # Ok::<(), walkability_core::EngineError>(())
/// ```
///
/// # Errors
/// Returns [`EngineError::NonPositiveReach`] when `reach_m` is zero,
/// negative or non-finite; that denotes a misconfigured time limit, not bad
/// POI data.
#[expect(
    clippy::float_arithmetic,
    reason = "the sub-score formula is floating-point by definition"
)]
pub fn category_score(distance_m: Option<f64>, reach_m: f64) -> Result<f64, EngineError> {
    if !reach_m.is_finite() || reach_m <= 0.0 {
        return Err(EngineError::NonPositiveReach { reach: reach_m });
    }
    let Some(distance_m) = distance_m else {
        return Ok(0.0);
    };
    Ok((100.0 * (1.0 - distance_m / reach_m)).clamp(0.0, 100.0))
}

/// Combine weighted sub-scores into the rounded overall score and its tier.
///
/// The weighted mean is commutative; the order of `results` cannot change
/// the outcome.
///
/// # Errors
/// Returns [`EngineError::EmptyResults`] for an empty slice and
/// [`EngineError::NonPositiveWeight`] when any weight is zero, negative or
/// non-finite.
#[expect(
    clippy::float_arithmetic,
    reason = "aggregation is a weighted mean over sub-scores"
)]
pub fn aggregate(results: &[CategoryResult]) -> Result<(f64, RatingTier), EngineError> {
    if results.is_empty() {
        return Err(EngineError::EmptyResults);
    }
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for result in results {
        if !result.weight.is_finite() || result.weight <= 0.0 {
            return Err(EngineError::NonPositiveWeight {
                category: result.category,
                weight: result.weight,
            });
        }
        weighted_sum += result.raw_score * result.weight;
        total_weight += result.weight;
    }
    let overall = (weighted_sum / total_weight).round();
    Ok((overall, RatingTier::from_score(overall)))
}

/// Qualitative rating band derived from the rounded overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RatingTier {
    /// Overall score in `[80, 100]`.
    Excellent,
    /// Overall score in `[60, 80)`.
    Good,
    /// Overall score in `[40, 60)`.
    Average,
    /// Overall score in `[0, 40)`.
    Poor,
}

impl RatingTier {
    /// Map a rounded overall score onto its band.
    ///
    /// Boundary values belong to the higher tier: exactly 80 is
    /// `Excellent`, exactly 40 is `Average`.
    #[must_use]
    pub fn from_score(overall: f64) -> Self {
        if overall >= 80.0 {
            Self::Excellent
        } else if overall >= 60.0 {
            Self::Good
        } else if overall >= 40.0 {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Short label for tables and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
        }
    }

    /// One-sentence assessment used in report summaries.
    #[must_use]
    pub const fn assessment(self) -> &'static str {
        match self {
            Self::Excellent => "Very good walkability with broad service coverage.",
            Self::Good => "Good walkability; solid coverage overall with room for small additions.",
            Self::Average => "Average walkability; additional services would improve the location.",
            Self::Poor => "Weak walkability; substantial gaps in the service infrastructure.",
        }
    }
}

impl std::fmt::Display for RatingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
