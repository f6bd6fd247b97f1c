//! Linear system solvers for numeth.
//!
//! This crate provides:
//! - A direct tri-diagonal solver (Thomas algorithm)
//! - Stationary iterative solvers (Jacobi, Gauss-Seidel, SOR) sharing one
//!   convergence-loop driver
//! - Convergence monitoring and diagonal scaling used by the iterative solvers
//!
//! Matrices and vectors are dense `nalgebra` types.

pub mod convergence;
pub mod diagonal;
pub mod error;
pub mod iterative;
mod shape;
pub mod tridiagonal;

pub use convergence::{ConvergenceMonitor, ConvergenceStatus, difference_norm, residual_norm};
pub use diagonal::InverseDiagonal;
pub use error::{Error, Result};
pub use iterative::{
    IterativeConfig, IterativeResult, Jacobi, Sor, UpdateRule, solve_gauss_seidel, solve_jacobi,
    solve_sor, solve_stationary,
};
pub use tridiagonal::{TridiagonalSystem, solve_tridiagonal};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn iterative_config_json_round_trip() {
        let config = IterativeConfig::default().with_tol(1e-4).with_max_iter(80);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""max_iter":80"#));

        let back: IterativeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn convergence_status_serializes_as_name() {
        let json = serde_json::to_string(&ConvergenceStatus::Exhausted).unwrap();
        assert_eq!(json, r#""Exhausted""#);
    }
}
