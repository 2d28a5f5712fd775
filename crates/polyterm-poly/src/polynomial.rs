//! Sparse univariate polynomials.
//!
//! A polynomial is stored as its nonzero terms in strictly descending
//! exponent order, so the leading term is always first and two polynomials
//! are equal exactly when their term sequences are.

use std::ops::{Bound, RangeBounds};

use num_traits::Zero;
use polyterm_numbers::Number;
use smallvec::SmallVec;

use crate::error::{PolyError, Result};
use crate::term::Term;

/// Term storage. Most polynomials built by hand have only a few terms.
pub(crate) type Terms = SmallVec<[Term; 4]>;

/// A univariate polynomial with integer or real coefficients.
///
/// Invariants:
/// - no two terms share an exponent
/// - no term has a zero coefficient (zero is the empty polynomial)
/// - terms are sorted by strictly decreasing exponent
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polynomial {
    terms: Terms,
}

/// Builds the single-term polynomial `coeff * x^exp`.
///
/// A zero coefficient gives the zero polynomial whatever the exponent is.
/// Otherwise the exponent must be a non-negative integer that fits in a
/// `u32`.
///
/// # Errors
///
/// Returns [`PolyError::InvalidExponent`] for a real, negative, or too large
/// exponent.
///
/// # Example
///
/// ```ignore
/// let p = pol(2, 3)?; // 2x^3
/// let q = p + pol(1, 0)? + pol(-1, 2)?;
/// assert_eq!(q.to_string(), "2x^3 - x^2 + 1");
/// ```
pub fn pol(coeff: impl Into<Number>, exp: impl Into<Number>) -> Result<Polynomial> {
    let coeff = coeff.into();
    if coeff.is_zero() {
        return Ok(Polynomial::zero());
    }

    let exp = exp.into();
    match exp.to_u32() {
        Some(e) => Ok(Polynomial::monomial(coeff, e)),
        None if !exp.is_integer() => Err(PolyError::InvalidExponent(format!(
            "exponent must be an integer, got {exp}"
        ))),
        None if exp.is_negative() => Err(PolyError::InvalidExponent(format!(
            "exponent must be non-negative, got {exp}"
        ))),
        None => Err(PolyError::InvalidExponent(format!(
            "exponent {exp} exceeds {}",
            u32::MAX
        ))),
    }
}

impl Polynomial {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            terms: Terms::new(),
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1)
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::monomial(1, 1)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: impl Into<Number>) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: impl Into<Number>, n: u32) -> Self {
        let c = c.into();
        if c.is_zero() {
            return Self::zero();
        }

        let mut terms = Terms::new();
        terms.push(Term::new(c, n));
        Self { terms }
    }

    /// Creates a polynomial from raw (coefficient, exponent) pairs.
    ///
    /// Pairs may come in any order; equal exponents are combined and zero
    /// coefficients dropped.
    #[must_use]
    pub fn from_terms<I, C>(raw: I) -> Self
    where
        I: IntoIterator<Item = (C, u32)>,
        C: Into<Number>,
    {
        let mut pairs: Vec<(Number, u32)> = raw.into_iter().map(|(c, e)| (c.into(), e)).collect();

        // Descending by exponent; the stable sort keeps input order within
        // an exponent so sums are accumulated left to right.
        pairs.sort_by(|a, b| b.1.cmp(&a.1));

        let mut terms = Terms::new();
        let mut pending: Option<(Number, u32)> = None;
        for (c, e) in pairs {
            pending = match pending {
                Some((acc, exp)) if exp == e => Some((&acc + &c, exp)),
                Some((acc, exp)) => {
                    if !acc.is_zero() {
                        terms.push(Term::new(acc, exp));
                    }
                    Some((c, e))
                }
                None => Some((c, e)),
            };
        }
        if let Some((acc, exp)) = pending {
            if !acc.is_zero() {
                terms.push(Term::new(acc, exp));
            }
        }

        Self { terms }
    }

    /// Wraps terms that already satisfy the invariants.
    pub(crate) fn from_canonical(terms: Terms) -> Self {
        debug_assert!(is_canonical(&terms), "non-canonical terms: {terms:?}");
        Self { terms }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if the degree is 0, which includes the zero polynomial.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.degree() == 0
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree, or 0 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.terms.first().map_or(0, Term::exponent)
    }

    /// Returns the terms, highest exponent first.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the leading term.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the leading coefficient.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<&Number> {
        self.terms.first().map(Term::coeff)
    }

    /// Returns the coefficient of x^e.
    #[must_use]
    pub fn coeff(&self, e: u32) -> Number {
        self.terms
            .iter()
            .find(|t| t.exponent() == e)
            .map_or_else(Number::zero, |t| t.coeff().clone())
    }

    /// Returns the value of a constant polynomial: the coefficient at
    /// exponent 0, or 0 when there is none.
    pub(crate) fn constant_value(&self) -> Number {
        match self.terms.last() {
            Some(t) if t.is_constant() => t.coeff().clone(),
            _ => Number::zero(),
        }
    }

    /// Returns the single-term polynomial at position `i`.
    #[must_use]
    pub fn term(&self, i: usize) -> Option<Self> {
        self.terms.get(i).map(|t| Self::from_canonical(std::iter::once(t.clone()).collect()))
    }

    /// Returns the polynomial made of the terms in `range`.
    ///
    /// Out-of-range bounds are clamped, so an empty selection gives zero.
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let len = self.terms.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return Self::zero();
        }
        Self::from_canonical(self.terms[start..end].iter().cloned().collect())
    }

    /// Iterates over the terms as single-term polynomials, highest exponent
    /// first.
    ///
    /// Every call starts a fresh iteration.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.terms.iter(),
        }
    }

    /// Compares against a plain number.
    ///
    /// Equal when both are zero, or when the polynomial is a nonzero
    /// constant whose coefficient equals `n`.
    #[must_use]
    pub fn equals_number(&self, n: &Number) -> bool {
        match self.terms.as_slice() {
            [] => n.is_zero(),
            [t] if t.is_constant() => t.coeff() == n,
            _ => false,
        }
    }
}

/// Iterator over the terms of a polynomial as single-term polynomials.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Term>,
}

impl Iterator for Iter<'_> {
    type Item = Polynomial;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|t| Polynomial::from_canonical(std::iter::once(t.clone()).collect()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|t| Polynomial::from_canonical(std::iter::once(t.clone()).collect()))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = Polynomial;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq<Number> for Polynomial {
    fn eq(&self, other: &Number) -> bool {
        self.equals_number(other)
    }
}

impl PartialEq<Polynomial> for Number {
    fn eq(&self, other: &Polynomial) -> bool {
        other.equals_number(self)
    }
}

macro_rules! impl_eq_primitive {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for Polynomial {
            fn eq(&self, other: &$t) -> bool {
                self.equals_number(&Number::from(*other))
            }
        }

        impl PartialEq<Polynomial> for $t {
            fn eq(&self, other: &Polynomial) -> bool {
                other.equals_number(&Number::from(*self))
            }
        }
    )*};
}

impl_eq_primitive!(i32, i64, f64);

fn is_canonical(terms: &[Term]) -> bool {
    terms.iter().all(|t| !t.coeff().is_zero())
        && terms.windows(2).all(|w| w[0].exponent() > w[1].exponent())
}
