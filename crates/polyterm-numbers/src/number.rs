//! Scalar numbers: exact integers or reals.
//!
//! A [`Number`] is what a polynomial coefficient, an evaluation point, or an
//! integration bound is made of. Integer arithmetic stays exact while only
//! integers are involved; as soon as a real participates (or a true division
//! happens) the result is an `f64`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::integer::Integer;

/// An integer or real scalar.
#[derive(Clone, Debug)]
pub enum Number {
    /// An exact, arbitrary precision integer.
    Int(Integer),
    /// A double precision real.
    Real(f64),
}

impl Number {
    /// Creates an integer number.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Self::Int(Integer::new(value))
    }

    /// Creates a real number.
    #[must_use]
    pub fn real(value: f64) -> Self {
        Self::Real(value)
    }

    /// Returns true if this is the integer variant.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns the integer value if this is the integer variant.
    #[must_use]
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Int(i) => Some(i),
            Self::Real(_) => None,
        }
    }

    /// Returns true if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int(i) => i.is_negative(),
            Self::Real(r) => *r < 0.0,
        }
    }

    /// Returns true if the value is numerically -1.
    #[must_use]
    pub fn is_minus_one(&self) -> bool {
        match self {
            Self::Int(i) => i.to_i64() == Some(-1),
            #[allow(clippy::float_cmp)]
            Self::Real(r) => *r == -1.0,
        }
    }

    /// Returns true if the value is numerically 1 or -1.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.is_one() || self.is_minus_one()
    }

    /// Returns the absolute value, keeping the variant.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Int(i) => Self::Int(i.abs()),
            Self::Real(r) => Self::Real(r.abs()),
        }
    }

    /// Converts to `f64`, rounding large integers.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Int(i) => i.to_f64(),
            Self::Real(r) => *r,
        }
    }

    /// Returns the value as a `u32` if this is an integer in range.
    ///
    /// Reals never qualify, even when integral-valued.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.as_integer().and_then(Integer::to_u32)
    }

    /// Turns an integral-valued real into the equal integer.
    ///
    /// Integers, fractional reals and non-finite reals are returned as is.
    #[must_use]
    pub fn normalize_integral(self) -> Self {
        match self {
            Self::Real(r) => Integer::from_integral_f64(r).map_or(Self::Real(r), Self::Int),
            int @ Self::Int(_) => int,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Int(i), Self::Real(r)) | (Self::Real(r), Self::Int(i)) => {
                Integer::from_integral_f64(*r).is_some_and(|exact| exact == *i)
            }
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::from(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::from(*other)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::Int(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        match self {
            Self::Int(i) => i.is_zero(),
            Self::Real(r) => *r == 0.0,
        }
    }
}

impl One for Number {
    fn one() -> Self {
        Self::Int(Integer::one())
    }

    #[allow(clippy::float_cmp)]
    fn is_one(&self) -> bool {
        match self {
            Self::Int(i) => i.is_one(),
            Self::Real(r) => *r == 1.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(r) => fmt_real(*r, f),
        }
    }
}

/// Writes a real in positional notation between 1e-4 and 1e16, and as
/// `<mantissa>e<sign><two or more digits>` outside that range.
fn fmt_real(r: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let magnitude = r.abs();
    if !r.is_finite() || magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{r}");
    }

    let scientific = format!("{r:e}");
    match scientific.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp.strip_prefix('-').map_or(('+', exp), |d| ('-', d));
            write!(f, "{mantissa}e{sign}{digits:0>2}")
        }
        None => f.write_str(&scientific),
    }
}

// Arithmetic operations. Integer pairs stay exact, anything else is real.
impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a + b),
            _ => Number::Real(self.to_f64() + rhs.to_f64()),
        }
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a - b),
            _ => Number::Real(self.to_f64() - rhs.to_f64()),
        }
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Number::Int(a * b),
            _ => Number::Real(self.to_f64() * rhs.to_f64()),
        }
    }
}

/// True division: the quotient is always real.
impl Div for &Number {
    type Output = Number;

    fn div(self, rhs: Self) -> Self::Output {
        Number::Real(self.to_f64() / rhs.to_f64())
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Number::Int(i) => Number::Int(-i),
            Number::Real(r) => Number::Real(-r),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(Integer::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(Integer::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Int(Integer::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Real(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_is_exact() {
        let a = Number::int(7);
        let b = Number::int(-3);

        assert!((a.clone() + b.clone()).is_integer());
        assert_eq!(a.clone() + b.clone(), Number::int(4));
        assert_eq!(a.clone() - b.clone(), Number::int(10));
        assert_eq!(a * b, Number::int(-21));
    }

    #[test]
    fn test_mixed_arithmetic_is_real() {
        let sum = Number::int(1) + Number::real(0.5);
        assert!(!sum.is_integer());
        assert_eq!(sum, 1.5);
    }

    #[test]
    fn test_true_division() {
        let q = Number::int(1) / Number::int(2);
        assert_eq!(q, 0.5);

        // Exact quotients are still reals, but compare equal to integers
        let q = Number::int(6) / Number::int(3);
        assert!(!q.is_integer());
        assert_eq!(q, Number::int(2));
    }

    #[test]
    fn test_cross_variant_equality() {
        assert_eq!(Number::int(1), Number::real(1.0));
        assert_ne!(Number::int(1), Number::real(1.5));
        assert_eq!(Number::real(-0.0), Number::int(0));
        assert_ne!(Number::real(f64::NAN), Number::real(f64::NAN));
    }

    #[test]
    fn test_zero_and_units() {
        assert!(Number::real(-0.0).is_zero());
        assert!(Number::int(0).is_zero());
        assert!(Number::real(1.0).is_one());
        assert!(Number::int(-1).is_minus_one());
        assert!(Number::real(-1.0).is_unit());
        assert!(!Number::int(2).is_unit());
    }

    #[test]
    fn test_normalize_integral() {
        let n = Number::real(9.0).normalize_integral();
        assert!(n.is_integer());
        assert_eq!(n.to_string(), "9");

        let n = Number::real(4.5).normalize_integral();
        assert!(!n.is_integer());

        let n = Number::real(f64::INFINITY).normalize_integral();
        assert!(!n.is_integer());
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Number::int(3).to_u32(), Some(3));
        assert_eq!(Number::int(-3).to_u32(), None);
        assert_eq!(Number::real(3.0).to_u32(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::int(-12).to_string(), "-12");
        assert_eq!(Number::real(0.25).to_string(), "0.25");
        assert_eq!(Number::real(2.0).to_string(), "2");
    }

    #[test]
    fn test_display_extreme_reals() {
        assert_eq!(Number::real(1e300).to_string(), "1e+300");
        assert_eq!(Number::real(-2.5e16).to_string(), "-2.5e+16");
        assert_eq!(Number::real(1e-7).to_string(), "1e-07");
        assert_eq!(Number::real(1.5e-123).to_string(), "1.5e-123");
        assert_eq!(Number::real(1e-4).to_string(), "0.0001");
        assert_eq!(Number::real(1e15).to_string(), "1000000000000000");
        assert_eq!(Number::real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::real(f64::NAN).to_string(), "NaN");
    }
}
