//! Stationary iterative solvers for linear systems.
//!
//! A single driver, [`solve_stationary`], owns validation, the iterate
//! vectors and the stopping decision. The methods differ only in how one
//! sweep turns `x_prev` into `x_curr`, which is injected as an
//! [`UpdateRule`].
//!
//! # Usage
//!
//! ```
//! use nalgebra::{dmatrix, dvector};
//! use numeth_solver::iterative::{IterativeConfig, solve_gauss_seidel, solve_jacobi};
//!
//! let a = dmatrix![4.0, 1.0; 1.0, 3.0];
//! let b = dvector![5.0, 4.0];
//! let x0 = dvector![0.0, 0.0];
//! let config = IterativeConfig::default().with_tol(1e-10).with_max_iter(200);
//!
//! let jacobi = solve_jacobi(&a, &x0, &b, &config).unwrap();
//! let gs = solve_gauss_seidel(&a, &x0, &b, &config).unwrap();
//!
//! assert!(jacobi.converged() && gs.converged());
//! assert!((gs.x[0] - 1.0).abs() < 1e-8);
//! ```
//!
//! # Module Structure
//!
//! - [`jacobi`] - Jacobi update rule
//! - [`sor`] - Gauss-Seidel / successive over-relaxation update rule

pub mod jacobi;
pub mod sor;

pub use jacobi::Jacobi;
pub use sor::Sor;

use nalgebra::{DMatrix, DVector};

use crate::convergence::{ConvergenceMonitor, ConvergenceStatus, difference_norm, residual_norm};
use crate::diagonal::InverseDiagonal;
use crate::error::{Error, Result};
use crate::shape::{check_len, square_dim};

/// Stopping configuration shared by the iterative solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterativeConfig {
    /// Absolute tolerance on `||x_curr - x_prev||`.
    pub tol: f64,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for IterativeConfig {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 50,
        }
    }
}

impl IterativeConfig {
    /// Set the tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the iteration budget.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Reject a zero budget or a tolerance that is not a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(Error::InvalidMaxIterations);
        }
        // Written so that NaN is rejected too
        if !(self.tol > 0.0) {
            return Err(Error::InvalidTolerance(self.tol));
        }
        Ok(())
    }
}

/// Result of a stationary iterative solve.
#[derive(Debug, Clone, PartialEq)]
pub struct IterativeResult {
    /// Last computed iterate.
    pub x: DVector<f64>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Final error metric: `||x_curr - x_prev||`, or the initial residual
    /// norm if no iteration ran.
    pub error: f64,
    /// Converged or exhausted.
    pub status: ConvergenceStatus,
}

impl IterativeResult {
    /// Whether the tolerance was met.
    pub fn converged(&self) -> bool {
        self.status.is_converged()
    }
}

/// One sweep of a stationary method.
pub trait UpdateRule: Send + Sync {
    /// Human-readable method name.
    fn name(&self) -> &'static str;

    /// Check rule-specific parameters before any work is done.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Compute the next iterate.
    ///
    /// `x_curr` holds a copy of `x_prev` on entry. Rules that sweep in place
    /// may read the rows they already overwrote.
    fn sweep(
        &self,
        a: &DMatrix<f64>,
        inv_diag: &InverseDiagonal,
        b: &DVector<f64>,
        x_prev: &DVector<f64>,
        x_curr: &mut DVector<f64>,
    );
}

/// Solve `A*x = b` with a stationary method.
///
/// Iterates `rule` from `x0` until `||x_curr - x_prev|| <= tol` or
/// `max_iter` iterations have run. If the initial residual `||b - A*x0||`
/// is already within `tol`, `x0` is returned without iterating.
///
/// Running out of iterations is not an error: the last iterate is returned
/// with [`ConvergenceStatus::Exhausted`].
///
/// # Errors
/// All checks happen before iterating:
/// * [`Error::NotSquare`] / [`Error::DimensionMismatch`] for bad shapes
/// * rule-specific configuration errors, then [`Error::InvalidMaxIterations`]
///   and [`Error::InvalidTolerance`]
/// * [`Error::ZeroDiagonal`] if `A` has a zero on its diagonal
///
/// [`Error::Diverged`] is returned if an iterate overflows to a non-finite value.
pub fn solve_stationary(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    b: &DVector<f64>,
    config: &IterativeConfig,
    rule: &dyn UpdateRule,
) -> Result<IterativeResult> {
    let n = square_dim(a)?;
    check_len(n, b)?;
    check_len(n, x0)?;
    rule.validate()?;
    config.validate()?;
    let inv_diag = InverseDiagonal::from_matrix(a)?;

    let mut monitor = ConvergenceMonitor::new(config, residual_norm(a, x0, b));
    let mut x_prev = x0.clone();
    let mut x_curr = x0.clone();

    while monitor.is_active() {
        rule.sweep(a, &inv_diag, b, &x_prev, &mut x_curr);

        let error = difference_norm(&x_curr, &x_prev);
        if !error.is_finite() {
            return Err(Error::Diverged {
                iteration: monitor.iterations() + 1,
            });
        }
        monitor.record(error);

        x_prev.copy_from(&x_curr);
    }

    let status = monitor.status();
    if status == ConvergenceStatus::Exhausted {
        log::warn!(
            "{} did not converge after {} iterations (error: {:.2e}, tol: {:.2e})",
            rule.name(),
            monitor.iterations(),
            monitor.error(),
            config.tol
        );
    } else {
        log::debug!(
            "{} converged: n = {}, iterations = {}, error = {:.2e}",
            rule.name(),
            n,
            monitor.iterations(),
            monitor.error()
        );
    }

    Ok(IterativeResult {
        x: x_curr,
        iterations: monitor.iterations(),
        error: monitor.error(),
        status,
    })
}

/// Solve `A*x = b` with the Jacobi method.
pub fn solve_jacobi(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    b: &DVector<f64>,
    config: &IterativeConfig,
) -> Result<IterativeResult> {
    solve_stationary(a, x0, b, config, &Jacobi)
}

/// Solve `A*x = b` with the Gauss-Seidel method (SOR with `omega = 1`).
pub fn solve_gauss_seidel(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    b: &DVector<f64>,
    config: &IterativeConfig,
) -> Result<IterativeResult> {
    solve_stationary(a, x0, b, config, &Sor::gauss_seidel())
}

/// Solve `A*x = b` with successive over-relaxation.
///
/// `omega` must satisfy `0 < omega < 2`.
pub fn solve_sor(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    b: &DVector<f64>,
    omega: f64,
    config: &IterativeConfig,
) -> Result<IterativeResult> {
    solve_stationary(a, x0, b, config, &Sor::new(omega))
}
