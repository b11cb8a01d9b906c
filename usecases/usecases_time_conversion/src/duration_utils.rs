//! Duration Utilities Module
//!
//! Conversions between `Duration` and integer counts. A missing duration
//! (`None`) reads as zero, the same way a getter on an absent message yields
//! zero for each field.
//!
//! Division truncates toward zero, so `new_duration_by_nanoseconds(-1)` is
//! `(0, -1)` and the sign of the nanosecond remainder always follows the
//! sign of the total.

use chrono::TimeDelta;
use entities_known_types::Duration;
use entities_utilities::BigNumber;

use crate::granularity::{self, DivisionRule, Granularity};

const RULE: DivisionRule = DivisionRule::Truncate;

/// Copy a duration as-is, without any validity check
pub fn duplicate_duration(x: Option<&Duration>) -> Option<Duration> {
    x.copied()
}

/// Exact nanosecond count of a duration
pub fn duration_as_nanos(x: Option<&Duration>) -> BigNumber {
    let d = x.copied().unwrap_or_default();
    granularity::total_nanos(d.seconds, d.nanos)
}

/// Convert a duration to a count of `unit`
///
/// If the result is out of range, it returns `i64::MAX` or `i64::MIN`.
pub fn duration_as_units(x: Option<&Duration>, unit: Granularity) -> i64 {
    let d = x.copied().unwrap_or_default();
    granularity::parts_as_units(d.seconds, d.nanos, unit, RULE)
}

/// Nanoseconds of the duration, saturating at the `i64` bounds
pub fn duration_as_nanoseconds(x: Option<&Duration>) -> i64 {
    duration_as_units(x, Granularity::Nanoseconds)
}

/// Microseconds of the duration, saturating at the `i64` bounds
pub fn duration_as_microseconds(x: Option<&Duration>) -> i64 {
    duration_as_units(x, Granularity::Microseconds)
}

/// Milliseconds of the duration, saturating at the `i64` bounds
pub fn duration_as_milliseconds(x: Option<&Duration>) -> i64 {
    duration_as_units(x, Granularity::Milliseconds)
}

/// Whole seconds of the duration, saturating at the `i64` bounds
pub fn duration_as_seconds(x: Option<&Duration>) -> i64 {
    duration_as_units(x, Granularity::Seconds)
}

/// Construct a duration from a chrono `TimeDelta`
pub fn new_duration(delta: TimeDelta) -> Duration {
    Duration::from_time_delta(delta)
}

/// Construct a duration from a count of `unit`
pub fn new_duration_by_units(value: i64, unit: Granularity) -> Duration {
    let (seconds, nanos) = granularity::units_as_parts(value, unit, RULE);
    Duration::new(seconds, nanos)
}

pub fn new_duration_by_nanoseconds(value: i64) -> Duration {
    new_duration_by_units(value, Granularity::Nanoseconds)
}

pub fn new_duration_by_microseconds(value: i64) -> Duration {
    new_duration_by_units(value, Granularity::Microseconds)
}

pub fn new_duration_by_milliseconds(value: i64) -> Duration {
    new_duration_by_units(value, Granularity::Milliseconds)
}

pub fn new_duration_by_seconds(value: i64) -> Duration {
    new_duration_by_units(value, Granularity::Seconds)
}

/// Method form of the duration conversions
pub trait DurationConversions {
    fn as_nanos(&self) -> BigNumber;
    fn as_units(&self, unit: Granularity) -> i64;

    fn as_nanoseconds(&self) -> i64 {
        self.as_units(Granularity::Nanoseconds)
    }

    fn as_microseconds(&self) -> i64 {
        self.as_units(Granularity::Microseconds)
    }

    fn as_milliseconds(&self) -> i64 {
        self.as_units(Granularity::Milliseconds)
    }

    fn as_seconds(&self) -> i64 {
        self.as_units(Granularity::Seconds)
    }
}

impl DurationConversions for Duration {
    fn as_nanos(&self) -> BigNumber {
        duration_as_nanos(Some(self))
    }

    fn as_units(&self, unit: Granularity) -> i64 {
        duration_as_units(Some(self), unit)
    }
}

impl DurationConversions for Option<Duration> {
    fn as_nanos(&self) -> BigNumber {
        duration_as_nanos(self.as_ref())
    }

    fn as_units(&self, unit: Granularity) -> i64 {
        duration_as_units(self.as_ref(), unit)
    }
}
