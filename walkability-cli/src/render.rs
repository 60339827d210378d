//! Plain-text rendering of a score report.
//!
//! Sections mirror the printable report: header, summary, per-category
//! table, recommendations.

use walkability_core::{CategoryResult, ScoreReport};

/// Render the full report as terminal text.
pub(crate) fn text_report(location: &str, report: &ScoreReport) -> String {
    let snapshot = report.snapshot();
    let (lon, lat) = snapshot.center.x_y();
    let mut lines = vec![
        format!("Walkability analysis: {location}"),
        format!("Centre: {lat:.4}, {lon:.4} (WGS84)"),
        format!(
            "Time limit: {} (reach {:.0} m)",
            snapshot.time_limit,
            snapshot.time_limit.reach_m()
        ),
        String::new(),
        format!(
            "Overall score: {:.0}/100 ({})",
            report.overall(),
            report.tier()
        ),
        report.tier().assessment().to_owned(),
        format!(
            "Services found: {} across {} categories",
            report.total_pois(),
            report.results().len()
        ),
        String::new(),
        format!(
            "{:<12} {:>5} {:>12} {:>6} {:>7}",
            "Category", "Count", "Nearest (m)", "Score", "Weight"
        ),
    ];
    for result in report.results() {
        lines.push(table_row(result));
    }
    lines.push(String::new());
    if report.recommendations().is_empty() {
        lines.push("No issues found; every requested category is within comfortable reach.".to_owned());
    } else {
        lines.push("Recommendations:".to_owned());
        for recommendation in report.recommendations() {
            lines.push(format!("  - {recommendation}"));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn table_row(result: &CategoryResult) -> String {
    let nearest = result
        .distance_m
        .map_or_else(|| "-".to_owned(), |distance| format!("{distance:.0}"));
    format!(
        "{:<12} {:>5} {:>12} {:>6.1} {:>7.2}",
        result.category.label(),
        result.poi_count,
        nearest,
        result.raw_score,
        result.weight
    )
}
