//! Core scoring engine for walkability analysis.
//!
//! The crate turns a centre point, a walking time limit, and per-category
//! point-of-interest lists into a deterministic 0–100 walkability score with
//! a per-category breakdown and recommendations. It performs no I/O and holds
//! no cross-request state; the collaborators that fetch isochrones and POIs
//! implement the traits in [`provider`].
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use geo::{Coord, Point};
//! use walkability_core::{AnalysisRequest, Category, Poi, TimeLimit, analyze};
//!
//! # fn main() -> Result<(), walkability_core::EngineError> {
//! let center = Point::new(7.63, 51.96);
//! let mut pois = BTreeMap::new();
//! pois.insert(
//!     Category::Supermarket,
//!     vec![Poi::new(1, Coord { x: 7.63, y: 51.961 }, Category::Supermarket)],
//! );
//! let request = AnalysisRequest {
//!     center,
//!     time_limit: TimeLimit::new(15)?,
//!     categories: vec![Category::Supermarket.with_default_weight()],
//!     pois,
//!     isochrone: None,
//! };
//! let report = analyze(&request)?;
//! assert!(report.overall() > 80.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod analyze;
pub mod category;
pub mod error;
pub mod geometry;
pub mod poi;
pub mod provider;
pub mod reach;
pub mod recommend;
pub mod report;
pub mod resolver;
pub mod score;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use analyze::{AnalysisRequest, analyze};
pub use category::{Category, CategoryWeight};
pub use error::{EngineError, ErrorKind};
pub use poi::Poi;
pub use provider::{FetchError, IsochroneProvider, PoiProvider};
pub use reach::{RECOMMENDED_TIME_LIMITS, TimeLimit, WALK_SPEED_M_PER_MIN};
pub use recommend::{RECOMMENDATION_THRESHOLD, recommend};
pub use report::{InputSnapshot, ScoreReport};
pub use resolver::{Nearest, nearest};
pub use score::{CategoryResult, RatingTier, aggregate, category_score};
