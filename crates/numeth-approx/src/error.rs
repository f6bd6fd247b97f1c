//! Error types for the approximation helpers.

use thiserror::Error;

/// Errors from the series approximations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApproxError {
    /// Tolerance that is not a positive number.
    #[error("Tolerance must be greater than 0: {0}")]
    InvalidTolerance(f64),

    /// Term budget spent before the tolerance was met.
    #[error("Series did not reach the tolerance after {terms} terms")]
    NotConverged { terms: usize },
}

/// Result type for approximation operations.
pub type Result<T> = std::result::Result<T, ApproxError>;
