//! Timestamp Module
//!
//! A point in time as seconds and nanoseconds since the Unix epoch. The
//! nanosecond component is never negative; instants before the epoch carry a
//! negative `seconds` and a positive `nanos`.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::ValidationError;
use crate::NANOS_PER_SECOND;

/// Seconds of 0001-01-01T00:00:00Z relative to the Unix epoch
pub const MIN_VALID_SECONDS: i64 = -62_135_596_800;

/// Seconds of 9999-12-31T23:59:59Z relative to the Unix epoch
pub const MAX_VALID_SECONDS: i64 = 253_402_300_799;

/// Point in time: seconds plus non-negative nanoseconds since the Unix epoch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Timestamp {
    /// Whole seconds since 1970-01-01T00:00:00Z
    pub seconds: i64,
    /// Fraction of a second in nanoseconds, in [0, 999999999]
    pub nanos: i32,
}

impl Timestamp {
    /// Create a timestamp from its raw components without any check
    pub const fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }

    /// Construct the exact timestamp of a chrono `DateTime` in any zone
    ///
    /// A leap second (sub-second part of one second or more in chrono's
    /// representation) folds into the last nanosecond of the preceding second.
    pub fn from_date_time<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        let nanos = t.timestamp_subsec_nanos().min(999_999_999);
        Self {
            seconds: t.timestamp(),
            nanos: nanos as i32,
        }
    }

    /// Check the structural invariants of the timestamp
    ///
    /// # Returns
    /// * `Ok(())` - seconds within [0001-01-01, 9999-12-31] and nanos in [0, 999999999]
    /// * `Err(ValidationError)` - the first violated invariant
    pub fn check_valid(&self) -> Result<(), ValidationError> {
        let (seconds, nanos) = (self.seconds, self.nanos);
        if seconds < MIN_VALID_SECONDS {
            return Err(ValidationError::TimestampBeforeMinimum { seconds, nanos });
        }
        if seconds > MAX_VALID_SECONDS {
            return Err(ValidationError::TimestampAfterMaximum { seconds, nanos });
        }
        if nanos < 0 || i64::from(nanos) >= NANOS_PER_SECOND {
            return Err(ValidationError::TimestampNanosOutOfRange { seconds, nanos });
        }
        Ok(())
    }

    /// Returns true if [`Timestamp::check_valid`] succeeds
    pub fn is_valid(&self) -> bool {
        self.check_valid().is_ok()
    }

    /// Resolve the timestamp to a UTC `DateTime`, validating it first
    pub fn as_date_time(&self) -> Result<DateTime<Utc>, ValidationError> {
        self.check_valid()?;
        // Validated nanos are non-negative and the seconds range is far inside chrono's.
        DateTime::<Utc>::from_timestamp(self.seconds, self.nanos as u32).ok_or(
            ValidationError::TimestampAfterMaximum {
                seconds: self.seconds,
                nanos: self.nanos,
            },
        )
    }

    /// Returns true if the timestamp is valid and resolves to the Unix epoch
    pub fn is_zero(&self) -> bool {
        matches!(self.as_date_time(), Ok(t) if t == DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(t: DateTime<Tz>) -> Self {
        Self::from_date_time(&t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_valid_timestamps() {
        assert!(Timestamp::new(0, 0).is_valid());
        assert!(Timestamp::new(MIN_VALID_SECONDS, 0).is_valid());
        assert!(Timestamp::new(MAX_VALID_SECONDS, 999_999_999).is_valid());
        assert!(Timestamp::new(-1, 999_999_999).is_valid());
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(matches!(
            Timestamp::new(MIN_VALID_SECONDS - 1, 0).check_valid(),
            Err(ValidationError::TimestampBeforeMinimum { .. })
        ));
        assert!(matches!(
            Timestamp::new(MAX_VALID_SECONDS + 1, 0).check_valid(),
            Err(ValidationError::TimestampAfterMaximum { .. })
        ));
        assert!(matches!(
            Timestamp::new(0, -1).check_valid(),
            Err(ValidationError::TimestampNanosOutOfRange { .. })
        ));
        assert!(matches!(
            Timestamp::new(0, 1_000_000_000).check_valid(),
            Err(ValidationError::TimestampNanosOutOfRange { .. })
        ));
    }

    #[test]
    fn test_is_zero() {
        assert!(Timestamp::new(0, 0).is_zero());
        assert!(!Timestamp::new(0, 1).is_zero());
        // invalid values are never zero
        assert!(!Timestamp::new(0, -1).is_zero());
    }

    #[test]
    fn test_from_date_time_normalizes_zone() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let t = offset.with_ymd_and_hms(1970, 1, 1, 3, 0, 1).unwrap();
        assert_eq!(Timestamp::from_date_time(&t), Timestamp::new(1, 0));
    }

    #[test]
    fn test_as_date_time_before_epoch() {
        let t = Timestamp::new(-1, 500_000_000).as_date_time().unwrap();
        assert_eq!(t.timestamp_millis(), -500);
    }
}
