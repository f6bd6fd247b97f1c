//! Error types for the linear solvers.

use thiserror::Error;

/// Errors that can occur while validating or solving a linear system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Coefficient matrix is not square.
    #[error("A[{rows} x {cols}] is not a square matrix")]
    NotSquare { rows: usize, cols: usize },

    /// A vector does not match the matrix dimension.
    #[error("Incompatible dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Relaxation parameter outside the open interval (0, 2).
    #[error("Invalid relaxation parameter omega = {0}: 0 < omega < 2")]
    InvalidRelaxation(f64),

    /// Iteration budget of zero.
    #[error("Maximum number of iterations must be greater than 0")]
    InvalidMaxIterations,

    /// Tolerance that is not a positive number.
    #[error("Tolerance must be greater than 0: {0}")]
    InvalidTolerance(f64),

    /// Zero pivot met during tri-diagonal forward elimination or back substitution.
    #[error("Zero pivot at row {index}")]
    ZeroPivot { index: usize },

    /// Zero diagonal entry, which the iterative update divides by.
    #[error("Zero diagonal entry at row {index}")]
    ZeroDiagonal { index: usize },

    /// Iterate became infinite or NaN.
    #[error("Iteration diverged at step {iteration}: iterate is not finite")]
    Diverged { iteration: usize },
}

impl Error {
    /// Shape errors: the inputs cannot describe a linear system.
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::NotSquare { .. } | Error::DimensionMismatch { .. })
    }

    /// Bad solver settings (omega, iteration budget, tolerance).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidRelaxation(_) | Error::InvalidMaxIterations | Error::InvalidTolerance(_)
        )
    }

    /// Arithmetic failures discovered while eliminating or iterating.
    pub fn is_numerical(&self) -> bool {
        matches!(
            self,
            Error::ZeroPivot { .. } | Error::ZeroDiagonal { .. } | Error::Diverged { .. }
        )
    }
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
