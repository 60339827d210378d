//! Human-readable suggestions derived from weak category results.

use crate::score::CategoryResult;

/// Raw sub-score below which a category earns a recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 40.0;

/// Derive recommendations from the per-category results.
///
/// Categories with no POI, or with a raw score below
/// [`RECOMMENDATION_THRESHOLD`], each produce one message. Output follows
/// the canonical category declaration order regardless of input order, so
/// reports stay stable and diffable. An empty vector is the valid
/// "no issues" outcome.
///
/// # Examples
/// ```
/// use walkability_core::{Category, CategoryResult, recommend};
///
/// let results = vec![CategoryResult {
///     category: Category::Pharmacy,
///     weight: 0.2,
///     poi_count: 0,
///     nearest: None,
///     distance_m: None,
///     raw_score: 0.0,
/// }];
/// let messages = recommend(&results);
/// assert!(messages[0].contains("pharmacy"));
/// ```
#[must_use]
pub fn recommend(results: &[CategoryResult]) -> Vec<String> {
    let mut ordered: Vec<&CategoryResult> = results.iter().collect();
    ordered.sort_by_key(|result| result.category);
    ordered.into_iter().filter_map(message_for).collect()
}

fn message_for(result: &CategoryResult) -> Option<String> {
    let label = result.category.as_str();
    let Some(distance_m) = result.distance_m else {
        return Some(format!(
            "No {label} found within the walking radius; \
             consider locations with one close by."
        ));
    };
    (result.raw_score < RECOMMENDATION_THRESHOLD).then(|| {
        format!(
            "The nearest {label} is {distance_m:.0} m away and only just walkable; \
             closer options would improve daily access."
        )
    })
}
