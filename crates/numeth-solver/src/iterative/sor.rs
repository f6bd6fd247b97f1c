//! Gauss-Seidel and successive over-relaxation (SOR) update rule.

use nalgebra::{DMatrix, DVector};

use super::UpdateRule;
use crate::diagonal::InverseDiagonal;
use crate::error::{Error, Result};

/// Successive over-relaxation with relaxation parameter `omega`.
///
/// Rows are swept in order and updated in place:
///
/// ```text
/// x_curr[i] = x_prev[i] + omega / A[i][i] * (b[i] - sum_j A[i][j] * x[j])
/// ```
///
/// where `x[j]` is the freshly updated value for `j < i` and the previous
/// value for `j >= i`. `omega = 1` is plain Gauss-Seidel, `omega > 1`
/// over-relaxes and `omega < 1` under-relaxes. Only `0 < omega < 2` is
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sor {
    omega: f64,
}

impl Sor {
    /// Create a rule with the given relaxation parameter.
    ///
    /// The range is checked by [`UpdateRule::validate`] before solving.
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    /// Plain Gauss-Seidel (`omega = 1`).
    pub fn gauss_seidel() -> Self {
        Self::new(1.0)
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }
}

impl Default for Sor {
    fn default() -> Self {
        Self::gauss_seidel()
    }
}

impl UpdateRule for Sor {
    fn name(&self) -> &'static str {
        if self.omega == 1.0 {
            "Gauss-Seidel"
        } else {
            "SOR"
        }
    }

    fn validate(&self) -> Result<()> {
        // Written so that NaN is rejected too
        if !(self.omega > 0.0 && self.omega < 2.0) {
            return Err(Error::InvalidRelaxation(self.omega));
        }
        Ok(())
    }

    fn sweep(
        &self,
        a: &DMatrix<f64>,
        inv_diag: &InverseDiagonal,
        b: &DVector<f64>,
        x_prev: &DVector<f64>,
        x_curr: &mut DVector<f64>,
    ) {
        let n = b.len();
        for i in 0..n {
            // x_curr[j] is already updated for j < i and still x_prev[j] for j >= i
            let ax_i: f64 = (0..n).map(|j| a[(i, j)] * x_curr[j]).sum();
            x_curr[i] = x_prev[i] + self.omega * inv_diag.get(i) * (b[i] - ax_i);
        }
    }
}
