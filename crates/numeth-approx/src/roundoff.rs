//! Round-off error from storing a value at reduced precision.

use num_traits::{Float, NumCast};

/// Store `value` at precision `T`, add the stored value to an `f64`
/// accumulator `count` times, and return the percent relative error of the
/// sum against `exact`.
///
/// Summing `1e-5` a hundred thousand times should give exactly `1.0`; the
/// error that remains comes from representing `1e-5` in `T`. Any
/// `num_traits::Float` works, including 16-bit [`half::f16`].
///
/// ```
/// use numeth_approx::roundoff_error;
///
/// let single = roundoff_error::<f32>(1e-5, 100_000, 1.0);
/// let double = roundoff_error::<f64>(1e-5, 100_000, 1.0);
/// assert!(single > double);
/// ```
pub fn roundoff_error<T: Float>(value: f64, count: usize, exact: f64) -> f64 {
    let stored = <T as NumCast>::from(value)
        .and_then(|v| v.to_f64())
        .unwrap_or(f64::NAN);

    let sum: f64 = (0..count).fold(0.0, |acc, _| acc + stored);
    (exact - sum).abs() / exact.abs() * 100.0
}
