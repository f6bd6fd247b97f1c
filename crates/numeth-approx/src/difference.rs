//! Relative error and forward-difference derivative estimates.

use num_traits::Float;

/// Relative error between successive approximations, `|(curr - prev) / curr|`.
///
/// Returned as a fraction, not a percentage.
#[inline]
pub fn relative_error<T: Float>(curr: T, prev: T) -> T {
    ((curr - prev) / curr).abs()
}

/// Relative error of each consecutive pair of approximations.
///
/// Element `i` compares `approxs[i + 1]` against `approxs[i]`.
pub fn relative_errors<T: Float>(approxs: &[T]) -> Vec<T> {
    approxs
        .windows(2)
        .map(|w| relative_error(w[1], w[0]))
        .collect()
}

/// Forward-difference estimate of `f'(x)` with step `h`.
#[inline]
pub fn forward_difference<T, F>(f: F, x: T, h: T) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    (f(x + h) - f(x)) / h
}

/// One forward-difference estimate of `f'(x)` per step size.
pub fn forward_difference_steps<T, F>(f: F, x: T, steps: &[T]) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    steps
        .iter()
        .map(|&h| forward_difference(&f, x, h))
        .collect()
}

/// Total error `|exact - estimate|` of the forward difference per step size.
///
/// For large steps this is dominated by truncation error (proportional to
/// `h`), for tiny steps by round-off in `f(x + h) - f(x)`.
pub fn truncation_errors<T, F>(f: F, exact: T, x: T, steps: &[T]) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    forward_difference_steps(f, x, steps)
        .into_iter()
        .map(|approx| (exact - approx).abs())
        .collect()
}
