//! Error types for hermite2d operations.
//!
//! The geometry APIs are infallible: degenerate control points yield zero
//! tangents or empty samples rather than errors. Only the equation parser
//! can fail.

use thiserror::Error;

/// Errors that can occur while re-extracting coefficients from a formatted
/// equation string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EquationError {
    /// A character that fits no term of the cubic.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),

    /// A coefficient that failed to parse as a number.
    #[error("invalid coefficient '{0}'")]
    InvalidCoefficient(String),

    /// Two terms with the same power of u.
    #[error("duplicate term for u^{0}")]
    DuplicateTerm(u32),

    /// An empty or whitespace-only equation string.
    #[error("empty equation")]
    Empty,
}
