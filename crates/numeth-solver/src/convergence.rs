//! Convergence tracking for the stationary iterative solvers.
//!
//! The monitor is seeded with the initial residual norm `||b - A*x0||`,
//! which only decides whether the loop is entered at all. Every later
//! stopping decision uses the norm of the change between successive
//! iterates, `||x_curr - x_prev||`.
//!
//! # Example
//!
//! ```
//! use numeth_solver::convergence::{ConvergenceMonitor, ConvergenceStatus};
//! use numeth_solver::iterative::IterativeConfig;
//!
//! let config = IterativeConfig::default().with_tol(1e-3).with_max_iter(10);
//! let mut monitor = ConvergenceMonitor::new(&config, 5.0);
//!
//! assert_eq!(monitor.status(), ConvergenceStatus::Active);
//! monitor.record(1e-4);
//! assert_eq!(monitor.status(), ConvergenceStatus::Converged);
//! assert_eq!(monitor.iterations(), 1);
//! ```

use nalgebra::{DMatrix, DVector};

use crate::iterative::IterativeConfig;

/// Where an iteration stands relative to its stopping criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvergenceStatus {
    /// Still iterating.
    Active,
    /// Error at or below the tolerance.
    Converged,
    /// Iteration budget spent without meeting the tolerance.
    Exhausted,
}

impl ConvergenceStatus {
    /// Returns true if more iterations are needed.
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, ConvergenceStatus::Active)
    }

    /// Returns true if the tolerance was met.
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceStatus::Converged)
    }
}

/// Tracks the error metric and iteration count of one solve.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    tol: f64,
    max_iter: usize,
    iterations: usize,
    error: f64,
}

impl ConvergenceMonitor {
    /// Create a monitor seeded with the initial error metric.
    pub fn new(config: &IterativeConfig, initial_error: f64) -> Self {
        Self {
            tol: config.tol,
            max_iter: config.max_iter,
            iterations: 0,
            error: initial_error,
        }
    }

    /// Record the error of a completed iteration.
    pub fn record(&mut self, error: f64) {
        self.error = error;
        self.iterations += 1;
        log::trace!("iteration {}: error = {:.3e}", self.iterations, error);
    }

    /// Current status. Convergence wins over exhaustion on the last iteration.
    pub fn status(&self) -> ConvergenceStatus {
        if self.error <= self.tol {
            ConvergenceStatus::Converged
        } else if self.iterations >= self.max_iter {
            ConvergenceStatus::Exhausted
        } else {
            ConvergenceStatus::Active
        }
    }

    /// Returns true while another iteration should run.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Most recent error metric.
    #[inline]
    pub fn error(&self) -> f64 {
        self.error
    }
}

/// Euclidean norm of the residual `b - A*x`.
pub fn residual_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    (b - a * x).norm()
}

/// Euclidean norm of the change between two iterates.
pub fn difference_norm(x_curr: &DVector<f64>, x_prev: &DVector<f64>) -> f64 {
    (x_curr - x_prev).norm()
}
