//! Shape checks shared by the direct and iterative solvers.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

/// Check that `a` is square and return its dimension.
pub(crate) fn square_dim(a: &DMatrix<f64>) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(Error::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

/// Check that `v` has length `n`.
pub(crate) fn check_len(n: usize, v: &DVector<f64>) -> Result<()> {
    if v.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            actual: v.len(),
        });
    }
    Ok(())
}
