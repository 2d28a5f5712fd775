//! Errors raised by polynomial operations.

use thiserror::Error;

/// Errors that can occur when building or combining polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// An operand has a shape the operation cannot accept.
    #[error("invalid operand: {0}")]
    InvalidOperand(String),

    /// A term exponent is negative, non-integral, or too large.
    #[error("invalid exponent: {0}")]
    InvalidExponent(String),

    /// A power is negative, non-integral, or too large.
    #[error("invalid exponentiation argument: {0}")]
    InvalidExponentiationArgument(String),

    /// A result would need an exponent beyond `u32::MAX`.
    #[error("exponent overflow: {0}")]
    ExponentOverflow(String),

    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// A rendering configuration is unusable.
    #[error("invalid notation: {0}")]
    InvalidNotation(String),
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
