//! Error types for degenerate algebraic operations.

use thiserror::Error;

/// Error returned when an operation has no well-defined result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The operation would divide by a zero length, magnitude or determinant.
    #[error("division by zero in {op}")]
    DivideByZero {
        /// Name of the operation that failed.
        op: &'static str,
    },

    /// An argument is outside of the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for fallible algebraic operations.
pub type AlgebraResult<T> = Result<T, AlgebraError>;
