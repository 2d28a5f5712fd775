//! # polyterm-numbers
//!
//! Scalar arithmetic for polyterm polynomial coefficients.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Integer-or-real scalars (`Number`) with exact integer arithmetic and
//!   floating-point semantics for everything else
//!
//! ## Numeric Model
//!
//! - `Int op Int` stays exact for `+`, `-` and `*`
//! - Any operation touching a real produces a real
//! - Division is true division and always produces a real

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod number;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use number::Number;
