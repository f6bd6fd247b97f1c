//! Diagonal scaling for the stationary iterative methods.
//!
//! Both Jacobi and SOR divide the row residual by the diagonal entry of
//! that row. [`InverseDiagonal`] extracts `D = diag(A)` once, inverts it,
//! and refuses matrices with a zero on the diagonal instead of letting the
//! division produce infinities.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Inverse of the main diagonal of a square matrix, `D^(-1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseDiagonal {
    inv_diag: DVector<f64>,
}

impl InverseDiagonal {
    /// Create from a square matrix.
    ///
    /// Returns [`Error::ZeroDiagonal`] naming the first zero entry.
    pub fn from_matrix(a: &DMatrix<f64>) -> Result<Self> {
        Self::from_diagonal(a.diagonal().as_slice())
    }

    /// Create from a diagonal vector.
    pub fn from_diagonal(diag: &[f64]) -> Result<Self> {
        if let Some(index) = diag.iter().position(|&d| d == 0.0) {
            return Err(Error::ZeroDiagonal { index });
        }
        Ok(Self {
            inv_diag: DVector::from_iterator(diag.len(), diag.iter().map(|&d| 1.0 / d)),
        })
    }

    /// `1 / A[i][i]`.
    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.inv_diag[i]
    }

    /// Apply the scaling: `D^(-1) * v`.
    pub fn apply(&self, v: &DVector<f64>) -> DVector<f64> {
        self.inv_diag.component_mul(v)
    }

    /// Dimension of the scaling.
    pub fn dim(&self) -> usize {
        self.inv_diag.len()
    }
}
