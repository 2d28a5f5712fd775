//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` so that integer
//! coefficients never overflow, no matter how high a polynomial is raised.

use dashu::base::{Abs, Signed as DashuSigned};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Largest magnitude below which every `f64` integer converts through `i64`.
const I64_SAFE_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig` and provides the operations needed by
/// exact integer coefficients.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Converts an integral, finite `f64` into an exact integer.
    ///
    /// Returns `None` for NaN, infinities and values with a fractional part.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_integral_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }

        if value.abs() < I64_SAFE_BOUND {
            return Some(Self::new(value as i64));
        }

        IBig::from_str_radix(&format!("{value:.0}"), 10)
            .ok()
            .map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Attempts to convert to a u32.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.0.clone().try_into().ok()
    }

    /// Converts to the nearest `f64`.
    ///
    /// Magnitudes beyond the `f64` range become infinite.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        match self.to_i64() {
            Some(v) => v as f64,
            None => self.0.to_string().parse().unwrap_or(f64::NAN),
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Integer::new(10);
        let b = Integer::new(3);

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a.clone() - b.clone()).to_i64(), Some(7));
        assert_eq!((&a * &b).to_i64(), Some(30));
        assert_eq!((-a).to_i64(), Some(-10));
    }

    #[test]
    fn test_sign() {
        assert!(Integer::new(-4).is_negative());
        assert!(!Integer::new(0).is_negative());
        assert!(!Integer::new(9).is_negative());
        assert_eq!(Integer::new(-4).abs(), Integer::new(4));
    }

    #[test]
    fn test_from_integral_f64() {
        assert_eq!(Integer::from_integral_f64(9.0), Some(Integer::new(9)));
        assert_eq!(Integer::from_integral_f64(-3.0), Some(Integer::new(-3)));
        assert_eq!(Integer::from_integral_f64(2.5), None);
        assert_eq!(Integer::from_integral_f64(f64::NAN), None);
        assert_eq!(Integer::from_integral_f64(f64::INFINITY), None);

        let big = Integer::from_integral_f64(1e20).unwrap();
        assert_eq!(big.to_string(), "100000000000000000000");
    }

    #[test]
    fn test_large_numbers() {
        // 2^64 does not fit in an i64 but converts to f64 exactly
        let a = Integer::from(u64::MAX) + Integer::new(1);
        assert_eq!(a.to_i64(), None);
        assert_eq!(a.to_string(), "18446744073709551616");
        assert_eq!(a.to_f64(), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Integer::new(7).to_u32(), Some(7));
        assert_eq!(Integer::new(-1).to_u32(), None);
        assert_eq!(Integer::new(1 << 40).to_u32(), None);
    }
}
