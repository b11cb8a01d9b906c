//! Time Facades
//!
//! Flat access to the well-known time types and every conversion helper.

pub use entities_known_types::{Duration, Timestamp, ValidationError, NANOS_PER_SECOND};
pub use entities_utilities::BigNumber;
pub use usecases_time_conversion::duration_utils::{
    duplicate_duration, duration_as_microseconds, duration_as_milliseconds, duration_as_nanos,
    duration_as_nanoseconds, duration_as_seconds, duration_as_units, new_duration,
    new_duration_by_microseconds, new_duration_by_milliseconds, new_duration_by_nanoseconds,
    new_duration_by_seconds, new_duration_by_units,
};
pub use usecases_time_conversion::timestamp_utils::{
    duplicate_timestamp, is_timestamp_zero, new_timestamp, new_timestamp_by_microseconds,
    new_timestamp_by_milliseconds, new_timestamp_by_nanoseconds, new_timestamp_by_seconds,
    new_timestamp_by_units, timestamp_as_microseconds, timestamp_as_milliseconds,
    timestamp_as_nanos, timestamp_as_nanoseconds, timestamp_as_seconds, timestamp_as_units,
};
pub use usecases_time_conversion::{
    DivisionRule, DurationConversions, Granularity, TimestampConversions,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_reachable() {
        let d = new_duration_by_milliseconds(1500);
        assert_eq!(d, Duration::new(1, 500_000_000));
        assert_eq!(duration_as_seconds(Some(&d)), 1);

        let t = new_timestamp_by_seconds(0);
        assert!(is_timestamp_zero(Some(&t)));
        assert_eq!(duplicate_timestamp(Some(&t)), None);
    }
}
