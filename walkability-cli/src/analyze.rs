//! Orchestration of one analysis run: fetch, score, render, export.

use std::collections::BTreeSet;

use geo::Point;
use walkability_core::{
    AnalysisRequest, Category, CategoryWeight, IsochroneProvider, PoiProvider, TimeLimit,
};
use walkability_data::{
    OrsClientConfig, OrsIsochroneClient, OverpassClientConfig, OverpassPoiClient,
};

use crate::{AnalyzeArgs, CliError, districts, render};

pub(crate) fn run(args: &AnalyzeArgs) -> Result<(), CliError> {
    let (center, location) = resolve_location(args)?;
    let time_limit = TimeLimit::new(args.minutes)?;
    let categories = selected_categories(&args.categories);
    let category_list: Vec<Category> = categories.iter().map(|cw| cw.category).collect();

    let mut ors_config = OrsClientConfig::new(&args.api_key);
    if let Some(url) = &args.ors_url {
        ors_config = ors_config.with_base_url(url);
    }
    let ors = OrsIsochroneClient::with_config(ors_config)?;

    let mut overpass_config = OverpassClientConfig::default();
    if let Some(url) = &args.overpass_url {
        overpass_config = overpass_config.with_base_url(url);
    }
    let overpass = OverpassPoiClient::with_config(overpass_config)?;

    log::info!("analysing {location} with a {time_limit} limit");
    let isochrone = ors.isochrone(center, time_limit)?;
    let pois = overpass.pois_within(&isochrone, &category_list)?;

    let request = AnalysisRequest {
        center,
        time_limit,
        categories,
        pois,
        isochrone: Some(isochrone),
    };
    let report = walkability_core::analyze(&request)?;

    print!("{}", render::text_report(&location, &report));
    if let Some(path) = &args.json {
        let payload = serde_json::to_string_pretty(&report)?;
        std::fs::write(path.as_std_path(), payload).map_err(|source| CliError::WriteReport {
            path: path.clone(),
            source,
        })?;
        log::info!("report written to {path}");
    }
    Ok(())
}

/// Resolve the centre point and a display label from the arguments.
pub(crate) fn resolve_location(args: &AnalyzeArgs) -> Result<(Point<f64>, String), CliError> {
    if let Some(name) = &args.district {
        let district = districts::find(name).ok_or_else(|| CliError::UnknownDistrict {
            name: name.clone(),
        })?;
        return Ok((
            Point::new(district.lon, district.lat),
            district.name.to_owned(),
        ));
    }
    match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Ok((
            Point::new(lon, lat),
            format!("coordinates ({lat:.4}, {lon:.4})"),
        )),
        _ => Err(CliError::MissingLocation),
    }
}

/// Collapse duplicates and attach default weights, keeping request order.
pub(crate) fn selected_categories(requested: &[Category]) -> Vec<CategoryWeight> {
    let mut seen = BTreeSet::new();
    let mut selected = Vec::new();
    for &category in requested {
        if seen.insert(category) {
            selected.push(category.with_default_weight());
        }
    }
    selected
}
