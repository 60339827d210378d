//! Walking time limits and the derived reach distance.

use std::ops::RangeInclusive;

use crate::EngineError;

/// Fixed walking speed in metres per minute.
///
/// A domain assumption of the analysis, not a tunable.
pub const WALK_SPEED_M_PER_MIN: f64 = 80.0;

/// Time-limit range offered by interactive front ends.
///
/// The engine itself accepts any positive limit; enforcing this range is
/// front-end policy.
pub const RECOMMENDED_TIME_LIMITS: RangeInclusive<u16> = 5..=20;

/// Maximum walking time for one analysis, in whole minutes.
///
/// # Examples
/// ```
/// use walkability_core::TimeLimit;
///
/// let limit = TimeLimit::new(15)?;
/// assert_eq!(limit.minutes(), 15);
/// assert_eq!(limit.reach_m(), 1200.0);
/// # Ok::<(), walkability_core::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TimeLimit(u16);

impl TimeLimit {
    /// Validate and construct a time limit.
    ///
    /// # Errors
    /// Returns [`EngineError::ZeroTimeLimit`] for zero minutes.
    pub const fn new(minutes: u16) -> Result<Self, EngineError> {
        if minutes == 0 {
            return Err(EngineError::ZeroTimeLimit);
        }
        Ok(Self(minutes))
    }

    /// The limit in minutes.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Walking reach for this limit, in metres.
    ///
    /// Derived on demand as `WALK_SPEED_M_PER_MIN * minutes`; never cached
    /// across requests.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "reach is defined as speed times minutes"
    )]
    pub fn reach_m(self) -> f64 {
        WALK_SPEED_M_PER_MIN * f64::from(self.0)
    }
}

impl std::fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.0)
    }
}
