//! Duration Module
//!
//! A signed span of time expressed as whole seconds plus a nanosecond
//! remainder. Both components share a sign, so `-1.5s` is stored as
//! `(-1, -500_000_000)`.

use chrono::TimeDelta;

use crate::error::ValidationError;
use crate::NANOS_PER_SECOND;

/// Largest magnitude of `seconds` accepted by [`Duration::check_valid`]
/// (10000 years of 365.25 days)
pub const MAX_DURATION_SECONDS: i64 = 315_576_000_000;

/// Signed elapsed time: seconds plus a same-signed nanosecond remainder
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    /// Signed whole seconds
    pub seconds: i64,
    /// Signed fraction of a second in nanoseconds, in [-999999999, 999999999]
    pub nanos: i32,
}

impl Duration {
    /// Create a duration from its raw components without any check
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Construct an exact duration from a chrono `TimeDelta`
    pub fn from_time_delta(delta: TimeDelta) -> Self {
        Self {
            seconds: delta.num_seconds(),
            nanos: delta.subsec_nanos(),
        }
    }

    /// Check the structural invariants of the duration
    ///
    /// # Returns
    /// * `Ok(())` - seconds within +-10000 years, |nanos| below one second,
    ///   and the two components not carrying opposite signs
    /// * `Err(ValidationError)` - the first violated invariant
    pub fn check_valid(&self) -> Result<(), ValidationError> {
        let (seconds, nanos) = (self.seconds, self.nanos);
        if !(-MAX_DURATION_SECONDS..=MAX_DURATION_SECONDS).contains(&seconds) {
            return Err(ValidationError::DurationSecondsOutOfRange { seconds, nanos });
        }
        if i64::from(nanos).abs() >= NANOS_PER_SECOND {
            return Err(ValidationError::DurationNanosOutOfRange { seconds, nanos });
        }
        if (seconds > 0 && nanos < 0) || (seconds < 0 && nanos > 0) {
            return Err(ValidationError::DurationSignMismatch { seconds, nanos });
        }
        Ok(())
    }

    /// Returns true if [`Duration::check_valid`] succeeds
    pub fn is_valid(&self) -> bool {
        self.check_valid().is_ok()
    }

    /// Convert to a chrono `TimeDelta` after validating the duration
    pub fn as_time_delta(&self) -> Result<TimeDelta, ValidationError> {
        self.check_valid()?;
        let out_of_range = ValidationError::DurationSecondsOutOfRange {
            seconds: self.seconds,
            nanos: self.nanos,
        };
        TimeDelta::try_seconds(self.seconds)
            .and_then(|whole| whole.checked_add(&TimeDelta::nanoseconds(i64::from(self.nanos))))
            .ok_or(out_of_range)
    }
}

impl From<TimeDelta> for Duration {
    fn from(delta: TimeDelta) -> Self {
        Self::from_time_delta(delta)
    }
}
