//! Collaborator traits at the engine boundary.
//!
//! The engine is pure computation over already-fetched, in-memory inputs.
//! These traits describe the collaborators that supply those inputs: a
//! routing service producing the reachability isochrone and a POI service
//! producing categorized amenity lists. Implementations live outside this
//! crate; an HTTP pair ships in `walkability-data`.
//!
//! Collaborators must translate upstream failures into [`FetchError`] (or a
//! genuinely empty result when that is semantically correct), never into
//! fabricated geometry or POIs.

use std::collections::BTreeMap;

use geo::{Point, Polygon};
use thiserror::Error;

use crate::{Category, Poi, TimeLimit};

/// Fetch the isochrone polygon for a centre and time limit.
///
/// Implementations must be thread-safe (`Send + Sync`) so independent
/// analyses can run concurrently.
pub trait IsochroneProvider: Send + Sync {
    /// Return the polygon bounding all points reachable on foot from
    /// `center` within `time_limit`.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the upstream service fails or answers
    /// with unusable geometry.
    fn isochrone(
        &self,
        center: Point<f64>,
        time_limit: TimeLimit,
    ) -> Result<Polygon<f64>, FetchError>;
}

/// Fetch categorized POIs inside (or on the boundary of) an isochrone.
pub trait PoiProvider: Send + Sync {
    /// Return the POIs for each requested category.
    ///
    /// Every requested category must be present in the result map, with an
    /// empty list when the area genuinely holds no matching POI.
    ///
    /// # Errors
    /// Returns a [`FetchError`] when the upstream service fails; partial
    /// per-category data must never be handed over silently.
    fn pois_within(
        &self,
        isochrone: &Polygon<f64>,
        categories: &[Category],
    ) -> Result<BTreeMap<Category, Vec<Poi>>, FetchError>;
}

/// Errors surfaced by fetch collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The request failed below the HTTP layer.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error detail from the transport layer.
        message: String,
    },
    /// The service reported an application-level error.
    #[error("service reported {code}: {message}")]
    Service {
        /// Service-specific error code.
        code: String,
        /// Service-provided message.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("failed to parse response: {message}")]
    Parse {
        /// Parse failure detail.
        message: String,
    },
    /// The response contained no usable isochrone geometry.
    #[error("response contained no usable isochrone geometry")]
    MissingGeometry,
}
