//! Jacobi update rule.

use nalgebra::{DMatrix, DVector};

use super::UpdateRule;
use crate::diagonal::InverseDiagonal;

/// Jacobi method: `x_curr = x_prev + D^(-1) * (b - A*x_prev)`.
///
/// Every row is updated from the previous iterate only, so the rows are
/// fully decoupled within a sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jacobi;

impl UpdateRule for Jacobi {
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn sweep(
        &self,
        a: &DMatrix<f64>,
        inv_diag: &InverseDiagonal,
        b: &DVector<f64>,
        x_prev: &DVector<f64>,
        x_curr: &mut DVector<f64>,
    ) {
        let residual = b - a * x_prev;
        *x_curr = x_prev + inv_diag.apply(&residual);
    }
}
