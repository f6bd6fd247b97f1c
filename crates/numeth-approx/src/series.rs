//! Taylor series approximations built from a per-term formula.
//!
//! A series is described by a function `formula(x, n)` returning its n-th
//! term at `x`. [`taylor_series_n`] sums a fixed number of terms,
//! [`taylor_series_tol`] keeps adding terms until successive partial sums
//! agree to a percent tolerance.

use num_traits::{Float, NumCast};

use crate::difference::relative_error;
use crate::error::{ApproxError, Result};

/// A partial sum that met its tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesApprox<T> {
    /// Value of the partial sum.
    pub value: T,
    /// Number of terms summed.
    pub terms: usize,
    /// Percent relative error between the last two partial sums.
    pub relative_error_percent: T,
}

/// Sum terms `1..=num_terms` of a series at `x`.
///
/// Terms are numbered from 1, so `formula(x, 1)` is the leading term.
pub fn taylor_series_n<T, F>(formula: F, x: T, num_terms: usize) -> T
where
    T: Float,
    F: Fn(T, usize) -> T,
{
    (1..=num_terms).fold(T::zero(), |acc, n| acc + formula(x, n))
}

/// Sum terms `0, 1, 2, ...` of a series at `x` until the percent relative
/// error between successive partial sums is at or below `tolerance_percent`.
///
/// At least one term is always summed. A partial sum that does not change
/// counts as converged.
///
/// # Errors
/// * [`ApproxError::InvalidTolerance`] if `tolerance_percent` is not positive
/// * [`ApproxError::NotConverged`] after `max_terms` terms without meeting
///   the tolerance
pub fn taylor_series_tol<T, F>(
    formula: F,
    x: T,
    tolerance_percent: T,
    max_terms: usize,
) -> Result<SeriesApprox<T>>
where
    T: Float,
    F: Fn(T, usize) -> T,
{
    // Written so that NaN is rejected too
    if !(tolerance_percent > T::zero()) {
        return Err(ApproxError::InvalidTolerance(
            tolerance_percent.to_f64().unwrap_or(f64::NAN),
        ));
    }

    let hundred = <T as NumCast>::from(100.0).unwrap_or_else(T::nan);
    let mut prev = T::zero();

    for n in 0..max_terms {
        let curr = prev + formula(x, n);
        let rel_err = if curr == prev {
            T::zero()
        } else {
            relative_error(curr, prev) * hundred
        };

        if rel_err <= tolerance_percent {
            log::debug!("Taylor series converged after {} terms", n + 1);
            return Ok(SeriesApprox {
                value: curr,
                terms: n + 1,
                relative_error_percent: rel_err,
            });
        }
        prev = curr;
    }

    Err(ApproxError::NotConverged { terms: max_terms })
}

/// n-th term of the Maclaurin series of `e^x`: `x^n / n!`.
pub fn exp_term<T: Float>(x: T, n: usize) -> T {
    (1..=n).fold(T::one(), |acc, k| {
        acc * x / <T as NumCast>::from(k).unwrap_or_else(T::nan)
    })
}
