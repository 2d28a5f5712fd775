//! Canonical text rendering.
//!
//! Polynomials print the way they are written by hand: `2x^3 - x^2 + 1`.
//! Unit coefficients are omitted except on the constant term, and the sign of
//! each term becomes the separator in front of it.

use std::fmt;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notation {
    variable: String,
}

impl Notation {
    /// Creates a notation printing the given variable name.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::InvalidNotation`] if `variable` is empty or
    /// blank.
    pub fn new(variable: impl Into<String>) -> Result<Self> {
        let variable = variable.into();
        if variable.trim().is_empty() {
            return Err(PolyError::InvalidNotation(
                "variable name must not be empty".to_string(),
            ));
        }
        Ok(Self { variable })
    }

    /// Returns the variable name.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for Notation {
    fn default() -> Self {
        Self {
            variable: "x".to_string(),
        }
    }
}

/// A polynomial paired with the notation used to print it.
#[derive(Clone, Copy, Debug)]
pub struct DisplayWith<'a> {
    poly: &'a Polynomial,
    notation: &'a Notation,
}

impl Polynomial {
    /// Returns a value that prints this polynomial using `notation`.
    #[must_use]
    pub fn display_with<'a>(&'a self, notation: &'a Notation) -> DisplayWith<'a> {
        DisplayWith {
            poly: self,
            notation,
        }
    }
}

impl fmt::Display for DisplayWith<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.poly, self.notation, f)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, &Notation::default(), f)
    }
}

fn render(poly: &Polynomial, notation: &Notation, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if poly.is_zero() {
        return write!(f, "0");
    }

    for (i, term) in poly.terms().iter().enumerate() {
        let coeff = term.coeff();
        match (i, coeff.is_negative()) {
            (0, true) => write!(f, "-")?,
            (0, false) => {}
            (_, true) => write!(f, " - ")?,
            (_, false) => write!(f, " + ")?,
        }

        if !coeff.is_unit() || term.is_constant() {
            write!(f, "{}", coeff.abs())?;
        }

        match term.exponent() {
            0 => {}
            1 => write!(f, "{}", notation.variable)?,
            e => write!(f, "{}^{e}", notation.variable)?,
        }
    }

    Ok(())
}
