//! Numeth - classical numerical methods for teaching.
//!
//! This is the facade crate that re-exports the workspace crates:
//!
//! - [`solver`] - tri-diagonal (Thomas) solver and the Jacobi / Gauss-Seidel /
//!   SOR stationary iterative solvers
//! - [`approx`] - relative error, forward differences, Taylor series and
//!   round-off error helpers
//!
//! # Example
//!
//! ```
//! use nalgebra::{dmatrix, dvector};
//! use numeth::prelude::*;
//!
//! let a = dmatrix![5.0, 1.0, 1.0; 2.0, 3.0, 0.0; 3.0, 0.0, 4.0];
//! let b = dvector![10.0, 11.0, 12.0];
//! let x0 = dvector![1.0, 1.0, 1.0];
//! let config = IterativeConfig::default().with_tol(1e-3).with_max_iter(100);
//!
//! let result = solve_gauss_seidel(&a, &x0, &b, &config).unwrap();
//! assert!(result.converged());
//! ```

pub use nalgebra;
pub use numeth_approx as approx;
pub use numeth_solver as solver;

/// Commonly used types and functions.
pub mod prelude {
    pub use numeth_approx::{
        ApproxError, SeriesApprox, exp_term, forward_difference, relative_error, roundoff_error,
        taylor_series_n, taylor_series_tol, truncation_errors,
    };
    pub use numeth_solver::{
        ConvergenceStatus, Error, IterativeConfig, IterativeResult, Jacobi, Sor,
        TridiagonalSystem, UpdateRule, solve_gauss_seidel, solve_jacobi, solve_sor,
        solve_stationary, solve_tridiagonal,
    };
}
