//! Error types raised by the scoring engine.
//!
//! All engine errors are synchronous and surfaced immediately to the caller;
//! nothing is retried internally because the engine performs no I/O. Each
//! variant classifies into one of three [`ErrorKind`]s so front ends can map
//! failures onto user-facing messaging without matching every variant.

use thiserror::Error;

use crate::Category;

/// Errors raised while validating input or computing a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A coordinate component was NaN or infinite.
    #[error("{axis} {value} is not a finite number")]
    NonFiniteCoordinate {
        /// Which component failed validation.
        axis: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Latitude outside the WGS84 domain.
    #[error("latitude {value} is outside the valid range [-90, 90]")]
    LatitudeOutOfRange {
        /// Offending value in degrees.
        value: f64,
    },
    /// Longitude outside the WGS84 domain.
    #[error("longitude {value} is outside the valid range [-180, 180]")]
    LongitudeOutOfRange {
        /// Offending value in degrees.
        value: f64,
    },
    /// The analysis request named no categories.
    #[error("at least one category must be requested")]
    EmptyCategories,
    /// The aggregator received no category results.
    #[error("cannot aggregate an empty set of category results")]
    EmptyResults,
    /// A time limit of zero minutes was supplied.
    #[error("time limit must be at least one minute")]
    ZeroTimeLimit,
    /// The derived walking reach was not a positive distance.
    #[error("walking reach must be positive, got {reach} m")]
    NonPositiveReach {
        /// Offending reach in metres.
        reach: f64,
    },
    /// A category weight was zero, negative or non-finite.
    #[error("weight for category '{category}' must be positive, got {weight}")]
    NonPositiveWeight {
        /// Category carrying the bad weight.
        category: Category,
        /// Offending weight.
        weight: f64,
    },
    /// Computed results do not cover exactly the requested category set.
    #[error("category results do not match the requested set (missing {missing:?}, unexpected {unexpected:?})")]
    CategoryMismatch {
        /// Requested categories absent from the results.
        missing: Vec<Category>,
        /// Result categories that were never requested.
        unexpected: Vec<Category>,
    },
}

impl EngineError {
    /// Classify the error into one of the documented kinds.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NonFiniteCoordinate { .. }
            | Self::LatitudeOutOfRange { .. }
            | Self::LongitudeOutOfRange { .. }
            | Self::EmptyCategories
            | Self::EmptyResults => ErrorKind::InvalidInput,
            Self::ZeroTimeLimit
            | Self::NonPositiveReach { .. }
            | Self::NonPositiveWeight { .. } => ErrorKind::InvalidConfiguration,
            Self::CategoryMismatch { .. } => ErrorKind::Inconsistency,
        }
    }
}

/// Coarse classification of [`EngineError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed data reached the engine (bad coordinates, empty sets).
    InvalidInput,
    /// The engine was configured with impossible parameters.
    InvalidConfiguration,
    /// Request and results disagree, signalling an upstream defect.
    Inconsistency,
}
