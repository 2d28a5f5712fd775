//! Evaluation, composition, differentiation and definite integration.
//!
//! Evaluation walks the terms from the highest exponent down, raising the
//! running value to the gap between consecutive exponents:
//!
//! p(x) = ((c₀ x^(e₀-e₁) + c₁) x^(e₁-e₂) + ...) x^(eₙ)
//!
//! which costs one power per term instead of one per degree, so sparse
//! high-degree polynomials stay cheap.

use num_traits::{One, Zero};
use polyterm_numbers::Number;
use tracing::{debug, trace};

use crate::arithmetic::raise_exponent;
use crate::error::{PolyError, Result};
use crate::operand::Operand;
use crate::polynomial::Polynomial;
use crate::term::Term;

impl Polynomial {
    /// Evaluates the polynomial at a number or composes it with a polynomial.
    ///
    /// Constant polynomials return their value without looking at `x`. A
    /// result of degree 0 always comes back as [`Operand::Number`], anything
    /// else as [`Operand::Poly`].
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Self::compose`].
    #[must_use]
    pub fn evaluate(&self, x: impl Into<Operand>) -> Operand {
        if self.is_constant() {
            return Operand::Number(self.constant_value());
        }

        match x.into() {
            Operand::Number(n) => Operand::Number(self.eval_number(&n)),
            Operand::Poly(p) if p.is_constant() => {
                Operand::Number(self.eval_number(&p.constant_value()))
            }
            Operand::Poly(p) => {
                let composed = self.compose(&p);
                if composed.is_constant() {
                    Operand::Number(composed.constant_value())
                } else {
                    Operand::Poly(composed)
                }
            }
        }
    }

    /// Evaluates the polynomial at a number.
    #[must_use]
    pub fn eval_number(&self, x: &Number) -> Number {
        self.horner_steps().fold(Number::zero(), |acc, (coeff, gap)| {
            &(&acc + coeff) * &pow_number(x, gap)
        })
    }

    /// Substitutes `inner` for the variable, returning `self(inner(x))`.
    ///
    /// # Panics
    ///
    /// Panics if the composed degree exceeds `u32::MAX`;
    /// [`Self::checked_compose`] reports that as an error instead.
    #[must_use]
    pub fn compose(&self, inner: &Polynomial) -> Polynomial {
        trace!(outer = %self, inner = %inner, "composing polynomials");
        self.horner_steps().fold(Polynomial::zero(), |acc, (coeff, gap)| {
            acc.add(&Polynomial::constant(coeff.clone()))
                .mul(&inner.pow(gap))
        })
    }

    /// Substitutes `inner` for the variable, failing if the composed degree
    /// would exceed `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if `degree * inner.degree()`
    /// does not fit in a `u32`.
    pub fn checked_compose(&self, inner: &Polynomial) -> Result<Polynomial> {
        if self.degree().checked_mul(inner.degree()).is_none() {
            return Err(PolyError::ExponentOverflow(format!(
                "x^{} composed with x^{} exceeds x^{}",
                self.degree(),
                inner.degree(),
                u32::MAX
            )));
        }
        Ok(self.compose(inner))
    }

    /// Yields each coefficient with the exponent gap to the next term; the
    /// last term's gap is its own exponent.
    fn horner_steps(&self) -> impl Iterator<Item = (&Number, u32)> + '_ {
        let terms = self.terms();
        terms.iter().enumerate().map(move |(i, t)| {
            let gap = terms
                .get(i + 1)
                .map_or(t.exponent(), |next| t.exponent() - next.exponent());
            (t.coeff(), gap)
        })
    }

    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let terms = self
            .terms()
            .iter()
            .filter(|t| !t.is_constant())
            .map(|t| Term::new(t.coeff() * &Number::from(t.exponent()), t.exponent() - 1))
            .collect();

        Self::from_canonical(terms)
    }

    /// Computes the antiderivative with zero constant of integration,
    /// failing if a term already has exponent `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ExponentOverflow`] if the degree is `u32::MAX`.
    pub fn checked_antiderivative(&self) -> Result<Self> {
        self.terms().iter().try_fold(Self::zero(), |acc, t| -> Result<Self> {
            let exp = raise_exponent(t.exponent(), 1)?;
            Ok(acc.add(&Self::monomial(t.coeff() / &Number::from(exp), exp)))
        })
    }

    /// Computes the antiderivative with zero constant of integration.
    ///
    /// # Panics
    ///
    /// Panics in every build profile if a term has exponent `u32::MAX`.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        match self.checked_antiderivative() {
            Ok(p) => p,
            Err(err) => panic!("{err}"),
        }
    }

    /// Computes the definite integral from `a` to `b`.
    ///
    /// Bounds may be numbers or constant polynomials. An integral-valued
    /// result is returned as an exact integer.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidOperand`] if a bound is a non-constant
    /// polynomial, and [`PolyError::ExponentOverflow`] if the degree is
    /// `u32::MAX`.
    pub fn integral(&self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<Number> {
        let a = bound_value(a.into())?;
        let b = bound_value(b.into())?;

        let antiderivative = self.checked_antiderivative()?;
        let value = (&antiderivative.eval_number(&b) - &antiderivative.eval_number(&a))
            .normalize_integral();

        debug!(lower = %a, upper = %b, result = %value, "definite integral");
        Ok(value)
    }
}

fn bound_value(bound: Operand) -> Result<Number> {
    bound.as_number().ok_or_else(|| {
        PolyError::InvalidOperand(format!(
            "integration bound must be a number or a constant polynomial, got {bound}"
        ))
    })
}

/// Computes `base^exp` by repeated squaring.
fn pow_number(base: &Number, exp: u32) -> Number {
    let mut result = Number::one();
    let mut base = base.clone();
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = &result * &base;
        }
        exp >>= 1;
        if exp > 0 {
            base = &base * &base;
        }
    }

    result
}
