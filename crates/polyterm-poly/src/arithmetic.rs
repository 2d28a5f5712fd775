//! Polynomial arithmetic.
//!
//! Addition and subtraction are a single descending merge of the two term
//! sequences. Every other operation is built on top of that merge, so the
//! canonical form is maintained by construction and never needs a separate
//! normalization pass.

use std::cmp::Ordering;

use num_traits::Zero;
use polyterm_numbers::Number;
use tracing::{debug, trace};

use crate::error::{PolyError, Result};
use crate::operand::Operand;
use crate::polynomial::{Polynomial, Terms};
use crate::term::Term;

impl Polynomial {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.merge(other, false)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.merge(other, true)
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::from_canonical(self.terms().iter().map(Term::negated).collect())
    }

    /// Merges two descending term sequences, optionally negating `other`.
    fn merge(&self, other: &Self, subtract: bool) -> Self {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return if subtract { other.neg() } else { other.clone() };
        }

        let from_other = |t: &Term| if subtract { t.negated() } else { t.clone() };
        let (a, b) = (self.terms(), other.terms());
        let mut terms = Terms::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].exponent().cmp(&b[j].exponent()) {
                Ordering::Greater => {
                    terms.push(a[i].clone());
                    i += 1;
                }
                Ordering::Less => {
                    terms.push(from_other(&b[j]));
                    j += 1;
                }
                Ordering::Equal => {
                    let c = if subtract {
                        a[i].coeff() - b[j].coeff()
                    } else {
                        a[i].coeff() + b[j].coeff()
                    };
                    if !c.is_zero() {
                        terms.push(Term::new(c, a[i].exponent()));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }

        terms.extend(a[i..].iter().cloned());
        terms.extend(b[j..].iter().map(from_other));

        Self::from_canonical(terms)
    }

    /// Multiplies every term by `c * x^e`.
    ///
    /// Products that round to zero are dropped.
    fn mul_by_term(&self, c: &Number, e: u32) -> Result<Self> {
        let mut terms = Terms::with_capacity(self.len());
        for t in self.terms() {
            let coeff = t.coeff() * c;
            if !coeff.is_zero() {
                terms.push(Term::new(coeff, raise_exponent(t.exponent(), e)?));
            }
        }

        Ok(Self::from_canonical(terms))
    }

    /// Multiplies two polynomials, failing if a product exponent would
    /// exceed `u32::MAX`.
    ///
    /// Each term of `other` contributes a scaled and shifted copy of `self`;
    /// the partial products are folded together by addition so colliding
    /// exponents combine and cancellations disappear.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if the product's degree does
    /// not fit in a `u32`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        other
            .terms()
            .iter()
            .try_fold(Self::zero(), |acc, t| -> Result<Self> {
                Ok(acc.merge(&self.mul_by_term(t.coeff(), t.exponent())?, false))
            })
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics in every build profile if a product exponent exceeds
    /// `u32::MAX`. [`Self::checked_mul`] reports that as an error instead.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match self.checked_mul(other) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: impl Into<Number>) -> Self {
        let c = c.into();
        let terms = self
            .terms()
            .iter()
            .filter_map(|t| {
                let coeff = t.coeff() * &c;
                (!coeff.is_zero()).then(|| Term::new(coeff, t.exponent()))
            })
            .collect();

        Self::from_canonical(terms)
    }

    /// Multiplies by x^n, failing if an exponent would exceed `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if `degree + n` does not fit
    /// in a `u32`.
    pub fn checked_shift(&self, n: u32) -> Result<Self> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        self.mul_by_term(&Number::int(1), n)
    }

    /// Shifts the polynomial by multiplying by x^n.
    ///
    /// # Panics
    ///
    /// Panics in every build profile if `degree + n` exceeds `u32::MAX`.
    #[must_use]
    pub fn shift(&self, n: u32) -> Self {
        match self.checked_shift(n) {
            Ok(shifted) => shifted,
            Err(err) => panic!("{err}"),
        }
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and the remainder either zero
    /// or of lower degree than the divisor.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let Some(lead) = divisor.leading_term() else {
            return Err(PolyError::DivisionByZero);
        };

        let mut quotient = Self::zero();
        let mut remainder = self.clone();

        while let Some(r_lead) = remainder.leading_term() {
            let r_exp = r_lead.exponent();
            if r_exp < lead.exponent() {
                break;
            }

            let step = Self::monomial(r_lead.coeff() / lead.coeff(), r_exp - lead.exponent());
            trace!(degree = r_exp, step = %step, "long division step");

            quotient = quotient.merge(&step, false);
            let next = remainder.sub(&step.mul(divisor));

            // Float rounding can leave a residue at the old leading exponent;
            // dropping it keeps the loop strictly decreasing.
            remainder = if next.degree() == r_exp && !next.is_zero() {
                trace!(residue = %next.terms()[0].coeff(), "dropping rounding residue");
                next.slice(1..)
            } else {
                next
            };
        }

        Ok((quotient, remainder))
    }

    /// Returns the quotient of long division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Returns the remainder of long division.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `p.pow(0)` is 1 for every `p`, zero included.
    ///
    /// # Panics
    ///
    /// Panics if `degree * n` exceeds `u32::MAX`; [`Self::try_pow`] rejects
    /// such powers instead.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let half = self.pow(n / 2);
        let squared = half.mul(&half);
        if n % 2 == 1 {
            squared.mul(self)
        } else {
            squared
        }
    }

    /// Raises the polynomial to a power given as a dynamic number.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidExponentiationArgument`] unless `n` is a
    /// non-negative integer that fits in a `u32` and the resulting degree
    /// fits in a `u32` too.
    pub fn try_pow(&self, n: impl Into<Number>) -> Result<Self> {
        let n = n.into();
        let Some(k) = n.to_u32() else {
            return Err(PolyError::InvalidExponentiationArgument(format!(
                "power must be a non-negative integer no larger than {}, got {n}",
                u32::MAX
            )));
        };

        if self.degree().checked_mul(k).is_none() {
            return Err(PolyError::InvalidExponentiationArgument(format!(
                "x^{} raised to the power {k} exceeds x^{}",
                self.degree(),
                u32::MAX
            )));
        }

        debug!(power = k, terms = self.len(), "raising polynomial to a power");
        Ok(self.pow(k))
    }
}

/// Adds two exponents, failing when the sum leaves the `u32` range.
pub(crate) fn raise_exponent(exp: u32, by: u32) -> Result<u32> {
    exp.checked_add(by).ok_or_else(|| {
        PolyError::ExponentOverflow(format!("x^{exp} * x^{by} exceeds x^{}", u32::MAX))
    })
}

/// Adds two operands, coercing numbers into constant polynomials.
#[must_use]
pub fn add(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Polynomial {
    lhs.into().into_poly().add(&rhs.into().into_poly())
}

/// Subtracts two operands, coercing numbers into constant polynomials.
#[must_use]
pub fn sub(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Polynomial {
    lhs.into().into_poly().sub(&rhs.into().into_poly())
}

/// Multiplies two operands, coercing numbers into constant polynomials.
///
/// # Panics
///
/// Panics under the same condition as [`Polynomial::mul`].
#[must_use]
pub fn mul(lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Polynomial {
    lhs.into().into_poly().mul(&rhs.into().into_poly())
}

/// Divides two operands with remainder, coercing numbers into constant
/// polynomials.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if `rhs` is zero.
pub fn div_rem(
    lhs: impl Into<Operand>,
    rhs: impl Into<Operand>,
) -> Result<(Polynomial, Polynomial)> {
    lhs.into().into_poly().div_rem(&rhs.into().into_poly())
}

/// Raises an operand to a power.
///
/// # Errors
///
/// Returns [`PolyError::InvalidExponentiationArgument`] unless `n` is a
/// non-negative integer that fits in a `u32`.
pub fn pow(base: impl Into<Operand>, n: impl Into<Number>) -> Result<Polynomial> {
    base.into().into_poly().try_pow(n)
}
