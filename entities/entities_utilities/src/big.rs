//! Arbitrary Precision Integers
//!
//! Provides the arbitrary precision integer operations needed to convert
//! between (seconds, nanoseconds) pairs and integer counts without losing
//! precision on the way.
//!
//! This module uses the `malachite` crate for arbitrary-precision arithmetic.
//! Two division conventions are exposed because callers need both:
//! truncating division (quotient rounded toward zero, remainder carries the
//! sign of the dividend) and floored division (quotient rounded toward
//! negative infinity, remainder carries the sign of the divisor).

use std::num::NonZeroI64;

use malachite::base::num::arithmetic::traits::{DivMod, DivRem};
use malachite::Integer;

/// Signed integer of unbounded size backed by malachite
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i32
    pub fn from_i32(value: i32) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to i32
    ///
    /// Returns None if the value is out of range
    pub fn to_i32(&self) -> Option<i32> {
        i32::try_from(&self.value).ok()
    }

    /// Convert to i64, clamping to `i64::MIN`/`i64::MAX` when out of range.
    pub fn to_i64_saturating(&self) -> i64 {
        match self.to_i64() {
            Some(value) => value,
            None if self.is_negative() => i64::MIN,
            None => i64::MAX,
        }
    }

    /// Returns true if the number is strictly below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Multiply and add: x * y + z
    pub fn mul_add(&self, y: &Self, z: &Self) -> Self {
        Self {
            value: &self.value * &y.value + &z.value,
        }
    }

    /// Truncating quotient and remainder
    ///
    /// The remainder has the sign of the dividend, so
    /// `-7 quo_rem 2 == (-3, -1)`.
    pub fn quo_rem(&self, divisor: NonZeroI64) -> (Self, Self) {
        let (q, r) = (&self.value).div_rem(&Integer::from(divisor.get()));
        (Self { value: q }, Self { value: r })
    }

    /// Floored quotient and modulus
    ///
    /// The modulus has the sign of the divisor, so
    /// `-7 div_mod 2 == (-4, 1)`.
    pub fn div_mod(&self, divisor: NonZeroI64) -> (Self, Self) {
        let (q, m) = (&self.value).div_mod(&Integer::from(divisor.get()));
        (Self { value: q }, Self { value: m })
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for BigNumber {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_sign() {
        let big = BigNumber::from_i64(12345);
        assert!(!big.is_negative());
        assert!(!big.is_zero());

        let big_neg = BigNumber::from_i64(-12345);
        assert!(big_neg.is_negative());
    }

    fn two() -> NonZeroI64 {
        NonZeroI64::new(2).unwrap()
    }

    #[test]
    fn test_times() {
        let a = BigNumber::from_i64(100);
        let b = BigNumber::from_i64(-50);
        assert_eq!(a.times(&b).to_i64(), Some(-5000));
    }

    #[test]
    fn test_mul_add() {
        let x = BigNumber::from_i64(10);
        let y = BigNumber::from_i64(5);
        let z = BigNumber::from_i64(3);

        assert_eq!(x.mul_add(&y, &z).to_i64(), Some(53)); // 10*5 + 3
    }

    #[test]
    fn test_quo_rem_truncates_toward_zero() {
        let (q, r) = BigNumber::from_i64(-7).quo_rem(two());
        assert_eq!(q.to_i64(), Some(-3));
        assert_eq!(r.to_i64(), Some(-1));
    }

    #[test]
    fn test_div_mod_floors() {
        let (q, m) = BigNumber::from_i64(-7).div_mod(two());
        assert_eq!(q.to_i64(), Some(-4));
        assert_eq!(m.to_i64(), Some(1));
    }

    #[test]
    fn test_negative_divisor() {
        let (q, r) = BigNumber::from_i64(7).quo_rem(NonZeroI64::new(-2).unwrap());
        assert_eq!((q.to_i64(), r.to_i64()), (Some(-3), Some(1)));
        let (q, m) = BigNumber::from_i64(7).div_mod(NonZeroI64::new(-2).unwrap());
        assert_eq!((q.to_i64(), m.to_i64()), (Some(-4), Some(-1)));
    }

    #[test]
    fn test_saturating_conversion() {
        let big = BigNumber::from_i64(i64::MAX).times(&BigNumber::from_i64(2));
        assert!(big.to_i64().is_none());
        assert_eq!(big.to_i64_saturating(), i64::MAX);

        let small = BigNumber::from_i64(i64::MIN).times(&BigNumber::from_i64(2));
        assert_eq!(small.to_i64_saturating(), i64::MIN);

        assert_eq!(BigNumber::from_i64(-5).to_i64_saturating(), -5);
    }

    #[test]
    fn test_to_i32() {
        assert_eq!(BigNumber::from_i64(999_999_999).to_i32(), Some(999_999_999));
        assert_eq!(BigNumber::from_i64(i64::from(i32::MAX) + 1).to_i32(), None);
    }
}
