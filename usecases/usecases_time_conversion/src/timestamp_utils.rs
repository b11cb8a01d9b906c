//! Timestamp Utilities Module
//!
//! Conversions between `Timestamp` and integer counts since the Unix epoch,
//! plus the zero-equivalence helpers.
//!
//! A missing timestamp and a timestamp at exactly the Unix epoch are the
//! same observable instant. Constructors and `duplicate_timestamp` collapse
//! the epoch to `None`; `is_timestamp_zero` reports both as zero.
//!
//! Division floors, so the nanosecond remainder of a constructed timestamp
//! is never negative: `new_timestamp_by_nanoseconds(-1)` is
//! `(-1, 999_999_999)`.

use chrono::{DateTime, TimeZone};
use entities_known_types::Timestamp;
use entities_utilities::BigNumber;

use crate::granularity::{self, DivisionRule, Granularity};

const RULE: DivisionRule = DivisionRule::Floor;

/// Copy a timestamp, collapsing the zero instant to `None`
///
/// A valid timestamp at the Unix epoch duplicates to `None`, keeping a
/// duplicate indistinguishable from one built by [`new_timestamp`].
/// Invalid timestamps are copied verbatim.
pub fn duplicate_timestamp(x: Option<&Timestamp>) -> Option<Timestamp> {
    match x {
        Some(t) if !t.is_zero() => Some(*t),
        _ => None,
    }
}

/// Returns true if the timestamp is missing, or valid and at the Unix epoch
pub fn is_timestamp_zero(x: Option<&Timestamp>) -> bool {
    x.map_or(true, Timestamp::is_zero)
}

/// Exact nanoseconds since the Unix epoch
pub fn timestamp_as_nanos(x: Option<&Timestamp>) -> BigNumber {
    let t = x.copied().unwrap_or_default();
    granularity::total_nanos(t.seconds, t.nanos)
}

/// Convert a timestamp to a count of `unit` since the Unix epoch
///
/// If the result is out of range, it returns `i64::MAX` or `i64::MIN`.
pub fn timestamp_as_units(x: Option<&Timestamp>, unit: Granularity) -> i64 {
    let t = x.copied().unwrap_or_default();
    granularity::parts_as_units(t.seconds, t.nanos, unit, RULE)
}

pub fn timestamp_as_nanoseconds(x: Option<&Timestamp>) -> i64 {
    timestamp_as_units(x, Granularity::Nanoseconds)
}

pub fn timestamp_as_microseconds(x: Option<&Timestamp>) -> i64 {
    timestamp_as_units(x, Granularity::Microseconds)
}

pub fn timestamp_as_milliseconds(x: Option<&Timestamp>) -> i64 {
    timestamp_as_units(x, Granularity::Milliseconds)
}

pub fn timestamp_as_seconds(x: Option<&Timestamp>) -> i64 {
    timestamp_as_units(x, Granularity::Seconds)
}

/// Construct a timestamp from a point in time
///
/// Both `None` and the Unix epoch yield `None`.
pub fn new_timestamp<Tz: TimeZone>(t: Option<&DateTime<Tz>>) -> Option<Timestamp> {
    let t = t?;
    if t.timestamp() == 0 && t.timestamp_subsec_nanos() == 0 {
        return None;
    }
    Some(Timestamp::from_date_time(t))
}

/// Construct a timestamp from a count of `unit` since the Unix epoch
pub fn new_timestamp_by_units(value: i64, unit: Granularity) -> Timestamp {
    let (seconds, nanos) = granularity::units_as_parts(value, unit, RULE);
    Timestamp::new(seconds, nanos)
}

pub fn new_timestamp_by_nanoseconds(value: i64) -> Timestamp {
    new_timestamp_by_units(value, Granularity::Nanoseconds)
}

pub fn new_timestamp_by_microseconds(value: i64) -> Timestamp {
    new_timestamp_by_units(value, Granularity::Microseconds)
}

pub fn new_timestamp_by_milliseconds(value: i64) -> Timestamp {
    new_timestamp_by_units(value, Granularity::Milliseconds)
}

pub fn new_timestamp_by_seconds(value: i64) -> Timestamp {
    new_timestamp_by_units(value, Granularity::Seconds)
}

/// Method form of the timestamp conversions
pub trait TimestampConversions {
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

impl TimestampConversions for Timestamp {
    fn as_nanos(&self) -> BigNumber {
        timestamp_as_nanos(Some(self))
    }

    fn as_units(&self, unit: Granularity) -> i64 {
        timestamp_as_units(Some(self), unit)
    }
}

impl TimestampConversions for Option<Timestamp> {
    fn as_nanos(&self) -> BigNumber {
        timestamp_as_nanos(self.as_ref())
    }

    fn as_units(&self, unit: Granularity) -> i64 {
        timestamp_as_units(self.as_ref(), unit)
    }
}
