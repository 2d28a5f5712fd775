//! Operator overloads.
//!
//! These are thin wrappers over the named methods, provided for every mix of
//! owned and borrowed polynomials and for plain scalars on either side.

use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};
use polyterm_numbers::Number;

use crate::polynomial::Polynomial;

macro_rules! impl_poly_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl $trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(&self, rhs)
            }
        }

        impl $trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(self, &rhs)
            }
        }

        impl $trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }
    };
}

impl_poly_binop!(Add, add);
impl_poly_binop!(Sub, sub);
impl_poly_binop!(Mul, mul);

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $($t:ty),*) => {$(
        impl $trait<$t> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: $t) -> Polynomial {
                Polynomial::$method(&self, &Polynomial::constant(rhs))
            }
        }

        impl $trait<$t> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: $t) -> Polynomial {
                Polynomial::$method(self, &Polynomial::constant(rhs))
            }
        }

        impl $trait<Polynomial> for $t {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&Polynomial::constant(self), &rhs)
            }
        }

        impl $trait<&Polynomial> for $t {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(&Polynomial::constant(self), rhs)
            }
        }
    )*};
}

impl_scalar_binop!(Add, add, i32, i64, f64, Number);
impl_scalar_binop!(Sub, sub, i32, i64, f64, Number);
impl_scalar_binop!(Mul, mul, i32, i64, f64, Number);

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}
