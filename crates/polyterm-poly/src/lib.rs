//! # polyterm-poly
//!
//! Sparse univariate polynomial arithmetic for polyterm.
//!
//! This crate provides:
//! - A canonical sparse representation (descending, duplicate-free,
//!   zero-free terms)
//! - Merge-based addition and subtraction, distributive multiplication,
//!   long division and binary exponentiation
//! - Evaluation, composition, derivatives and definite integrals
//! - Hand-written style rendering (`2x^3 - x^2 + 1`)
//!
//! ## Coercion
//!
//! Plain numbers combine with polynomials on either side. The free functions
//! [`add`], [`sub`], [`mul`], [`div_rem`] and [`pow`] take anything
//! convertible to an [`Operand`], and the `std::ops` operators accept
//! `i32`, `i64`, `f64` and [`Number`] operands.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod calculus;
pub mod display;
pub mod error;
pub mod operand;
pub mod ops;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use arithmetic::{add, div_rem, mul, pow, sub};
pub use display::{DisplayWith, Notation};
pub use error::{PolyError, Result};
pub use operand::Operand;
pub use polynomial::{pol, Iter, Polynomial};
pub use polyterm_numbers::{Integer, Number};
pub use term::Term;
