//! Approximation-error helpers for numeth.
//!
//! - [`difference`] - relative error and forward-difference derivatives,
//!   with truncation-error sweeps over step sizes
//! - [`series`] - Taylor series to a fixed term count or to a tolerance
//! - [`roundoff`] - round-off error of repeated summation at reduced precision
//!
//! Everything is generic over `num_traits::Float`, so `f32`, `f64` and the
//! 16-bit [`f16`] (re-exported from `half`) all work.

pub mod difference;
pub mod error;
pub mod roundoff;
pub mod series;

pub use difference::{
    forward_difference, forward_difference_steps, relative_error, relative_errors,
    truncation_errors,
};
pub use error::{ApproxError, Result};
pub use half::f16;
pub use roundoff::roundoff_error;
pub use series::{SeriesApprox, exp_term, taylor_series_n, taylor_series_tol};
