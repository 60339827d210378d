//! Facade crate for the walkability scoring engine.
//!
//! This crate re-exports the core domain types and, behind the `fetch-http`
//! feature, the HTTP collaborators that supply isochrones and POIs.

#![forbid(unsafe_code)]

pub use walkability_core::{
    AnalysisRequest, Category, CategoryResult, CategoryWeight, EngineError, ErrorKind, FetchError,
    InputSnapshot, IsochroneProvider, Poi, PoiProvider, RatingTier, ScoreReport, TimeLimit,
    WALK_SPEED_M_PER_MIN, aggregate, analyze, category_score, nearest, recommend,
};

#[cfg(feature = "fetch-http")]
pub use walkability_data::{
    ClientBuildError, OrsClientConfig, OrsIsochroneClient, OverpassClientConfig,
    OverpassPoiClient,
};
