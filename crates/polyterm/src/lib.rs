//! # polyterm
//!
//! Symbolic univariate polynomial algebra.
//!
//! polyterm represents polynomials with integer or real coefficients as
//! sparse, canonical term sequences and provides exact operations over them.
//!
//! ## Features
//!
//! - **Exact integers**: arbitrary precision integer coefficients, real
//!   coefficients with ordinary `f64` semantics
//! - **Arithmetic**: addition, subtraction, multiplication, long division
//!   and exponentiation, with plain numbers accepted on either side
//! - **Calculus**: derivatives, antiderivatives and definite integrals
//! - **Evaluation**: at numbers, or at polynomials for composition
//! - **Rendering**: `2x^3 - x^2 + 1`, with a configurable variable name
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use polyterm::prelude::*;
//!
//! let p = pol(2, 3)? - pol(1, 2)? + 1;
//! assert_eq!(p.to_string(), "2x^3 - x^2 + 1");
//!
//! let (q, r) = div_rem(pol(1, 2)? - 1, Polynomial::x() - 1)?;
//! assert_eq!(q.to_string(), "x + 1");
//! assert!(r.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyterm_numbers as numbers;
pub use polyterm_poly as poly;

pub use polyterm_poly::{pol, PolyError, Polynomial};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyterm_numbers::{Integer, Number};
    pub use polyterm_poly::{
        add, div_rem, mul, pol, pow, sub, Notation, Operand, PolyError, Polynomial, Term,
    };
}
