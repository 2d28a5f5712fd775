//! Values that are either a number or a polynomial.
//!
//! Every binary operation accepts an [`Operand`] on either side, coercing
//! plain numbers into constant polynomials, so `2 - p` and `p - 2` go through
//! the same code.

use std::fmt;

use polyterm_numbers::{Integer, Number};

use crate::polynomial::Polynomial;

/// A plain number or a polynomial.
#[derive(Clone, PartialEq, Debug)]
pub enum Operand {
    /// A scalar.
    Number(Number),
    /// A polynomial.
    Poly(Polynomial),
}

impl Operand {
    /// Coerces into a polynomial. Numbers become constant polynomials, and
    /// zero becomes the zero polynomial.
    #[must_use]
    pub fn into_poly(self) -> Polynomial {
        match self {
            Self::Number(n) => Polynomial::constant(n),
            Self::Poly(p) => p,
        }
    }

    /// Returns the scalar value of a number or of a constant polynomial.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(n.clone()),
            Self::Poly(p) if p.is_constant() => Some(p.constant_value()),
            Self::Poly(_) => None,
        }
    }

    /// Returns the polynomial if this operand holds one.
    #[must_use]
    pub fn as_poly(&self) -> Option<&Polynomial> {
        match self {
            Self::Poly(p) => Some(p),
            Self::Number(_) => None,
        }
    }
}

impl From<Polynomial> for Operand {
    fn from(value: Polynomial) -> Self {
        Self::Poly(value)
    }
}

impl From<&Polynomial> for Operand {
    fn from(value: &Polynomial) -> Self {
        Self::Poly(value.clone())
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {$(
        impl From<$t> for Operand {
            fn from(value: $t) -> Self {
                Self::Number(Number::from(value))
            }
        }
    )*};
}

impl_from_scalar!(i32, i64, u32, u64, f32, f64, Integer);

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Poly(p) => write!(f, "{p}"),
        }
    }
}
