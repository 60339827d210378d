//! HTTP fetch collaborators for the walkability engine.
//!
//! Two clients implement the provider traits from `walkability_core`:
//!
//! - [`OrsIsochroneClient`] fetches foot-walking isochrones from an
//!   OpenRouteService instance.
//! - [`OverpassPoiClient`] fetches categorized points of interest from an
//!   Overpass API instance and filters them to the isochrone polygon.
//!
//! Both traits are synchronous so the core stays embeddable in synchronous
//! contexts; the clients bridge to async `reqwest` by blocking on a stored
//! current-thread Tokio runtime. Callers already inside a multi-threaded
//! runtime are detected and served via `block_in_place`.
//!
//! # Examples
//!
//! ```no_run
//! use geo::Point;
//! use walkability_core::{Category, IsochroneProvider, PoiProvider, TimeLimit};
//! use walkability_data::{OrsIsochroneClient, OverpassPoiClient};
//!
//! let ors = OrsIsochroneClient::new("your-api-key")?;
//! let overpass = OverpassPoiClient::new()?;
//!
//! let center = Point::new(7.6261347, 51.9606649);
//! let isochrone = ors.isochrone(center, TimeLimit::new(15)?)?;
//! let pois = overpass.pois_within(&isochrone, &[Category::Supermarket])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod http;
pub mod isochrone;
pub mod ors;
pub mod overpass;

pub use http::ClientBuildError;
pub use isochrone::{DEFAULT_ORS_BASE_URL, OrsClientConfig, OrsIsochroneClient};
pub use overpass::{DEFAULT_OVERPASS_URL, OverpassClientConfig, OverpassPoiClient};
