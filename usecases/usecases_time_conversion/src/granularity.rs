//! Granularity Module
//!
//! One implementation of the two conversion directions, parameterized only by
//! the nanosecond factor of the target unit and the division rule. Durations
//! and timestamps at all four units go through these two functions.

use std::num::NonZeroI64;

use entities_known_types::NANOS_PER_SECOND;
use entities_utilities::BigNumber;
use tracing::trace;

// Evaluated only in const items, so a zero argument fails the build.
const fn non_zero(value: i64) -> NonZeroI64 {
    match NonZeroI64::new(value) {
        Some(value) => value,
        None => panic!("zero divisor"),
    }
}

const ONE_SECOND: NonZeroI64 = non_zero(NANOS_PER_SECOND);
const ONE_MILLISECOND: NonZeroI64 = non_zero(1_000_000);
const ONE_MICROSECOND: NonZeroI64 = non_zero(1_000);
const ONE_NANOSECOND: NonZeroI64 = non_zero(1);

/// Integer time unit a value can be converted to or from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl Granularity {
    /// Every granularity, finest first
    pub const ALL: [Granularity; 4] = [
        Granularity::Nanoseconds,
        Granularity::Microseconds,
        Granularity::Milliseconds,
        Granularity::Seconds,
    ];

    /// Number of nanoseconds in one unit
    pub const fn nanos_factor(self) -> NonZeroI64 {
        match self {
            Granularity::Nanoseconds => ONE_NANOSECOND,
            Granularity::Microseconds => ONE_MICROSECOND,
            Granularity::Milliseconds => ONE_MILLISECOND,
            Granularity::Seconds => ONE_SECOND,
        }
    }
}

/// How integer division rounds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionRule {
    /// Round toward zero; the remainder takes the sign of the dividend
    Truncate,
    /// Round toward negative infinity; the remainder takes the sign of the divisor
    Floor,
}

/// Exact nanosecond total of a (seconds, nanos) pair
pub fn total_nanos(seconds: i64, nanos: i32) -> BigNumber {
    BigNumber::from_i64(seconds).mul_add(
        &BigNumber::from_i64(NANOS_PER_SECOND),
        &BigNumber::from_i32(nanos),
    )
}

/// Convert a (seconds, nanos) pair to a count of `unit`, saturating at the `i64` bounds
pub fn parts_as_units(seconds: i64, nanos: i32, unit: Granularity, rule: DivisionRule) -> i64 {
    let total = total_nanos(seconds, nanos);
    let (units, _) = divide(&total, unit.nanos_factor(), rule);
    saturate(&units)
}

/// Split a count of `unit` into a (seconds, nanos) pair
///
/// The seconds saturate at the `i64` bounds; the nanos are the exact
/// remainder of the division even when the seconds were clamped.
pub fn units_as_parts(value: i64, unit: Granularity, rule: DivisionRule) -> (i64, i32) {
    let factor = BigNumber::from_i64(unit.nanos_factor().get());
    let total = BigNumber::from_i64(value).times(&factor);
    let (seconds, nanos) = divide(&total, ONE_SECOND, rule);
    // |remainder| < 1e9 always fits
    let nanos = nanos.to_i32().unwrap_or_default();
    (saturate(&seconds), nanos)
}

fn divide(value: &BigNumber, factor: NonZeroI64, rule: DivisionRule) -> (BigNumber, BigNumber) {
    match rule {
        DivisionRule::Truncate => value.quo_rem(factor),
        DivisionRule::Floor => value.div_mod(factor),
    }
}

fn saturate(value: &BigNumber) -> i64 {
    match value.to_i64() {
        Some(v) => v,
        None => {
            let clamped = value.to_i64_saturating();
            trace!(%value, clamped, "time conversion saturated");
            clamped
        }
    }
}
