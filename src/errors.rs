// ============================================================================
// Rational Errors
// Error types for exact rational arithmetic operations
// ============================================================================

use std::fmt;

/// Errors that can occur during rational arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// Attempted to construct a fraction with a zero denominator
    InvalidDenominator,
    /// Attempted division by a zero-valued fraction
    DivisionByZero,
    /// Negative exponent without a defined integer semantics
    UnsupportedExponent,
    /// An intermediate product, sum, or LCM exceeded the i64 range
    ArithmeticOverflow,
}

impl fmt::Display for RationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RationalError::InvalidDenominator => {
                write!(f, "invalid denominator: a fraction's denominator cannot be zero")
            },
            RationalError::DivisionByZero => {
                write!(f, "division by zero: right operand is a zero-valued fraction")
            },
            RationalError::UnsupportedExponent => {
                write!(f, "unsupported exponent: negative powers are not defined for integer components")
            },
            RationalError::ArithmeticOverflow => {
                write!(f, "arithmetic overflow: intermediate result exceeded the i64 range")
            },
        }
    }
}

impl std::error::Error for RationalError {}

/// Result type alias for rational operations
pub type RationalResult<T> = Result<T, RationalError>;
