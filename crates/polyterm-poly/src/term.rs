//! Single polynomial terms.

use polyterm_numbers::Number;

/// A term `c * x^e` with a nonzero coefficient.
///
/// Terms only ever exist inside a [`Polynomial`](crate::Polynomial), which
/// never stores a zero coefficient.
#[derive(Clone, PartialEq, Debug)]
pub struct Term {
    coeff: Number,
    exp: u32,
}

impl Term {
    pub(crate) fn new(coeff: Number, exp: u32) -> Self {
        Self { coeff, exp }
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &Number {
        &self.coeff
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exponent(&self) -> u32 {
        self.exp
    }

    /// Returns true if this is the constant term.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exp == 0
    }

    pub(crate) fn negated(&self) -> Self {
        Self::new(-&self.coeff, self.exp)
    }
}
