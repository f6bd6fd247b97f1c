//! Direct solver for tri-diagonal systems (Thomas algorithm / TDMA).
//!
//! Only the main diagonal and the two adjacent diagonals of the coefficient
//! matrix are read. No pivoting is performed, so the system must be
//! diagonally dominant or otherwise safe to eliminate in row order.
//!
//! The right-hand side is never modified: elimination runs on internal
//! working copies of the main diagonal and the right-hand side.

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};
use crate::shape::{check_len, square_dim};

/// A tri-diagonal system stored as its three bands.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    /// First sub-diagonal, `lower[i] = A[i+1][i]` (length N-1).
    lower: Vec<f64>,
    /// Main diagonal, `diag[i] = A[i][i]` (length N).
    diag: Vec<f64>,
    /// First super-diagonal, `upper[i] = A[i][i+1]` (length N-1).
    upper: Vec<f64>,
}

impl TridiagonalSystem {
    /// Build a system directly from its bands.
    pub fn from_bands(lower: Vec<f64>, diag: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        let off = diag.len().saturating_sub(1);
        for band in [&lower, &upper] {
            if band.len() != off {
                return Err(Error::DimensionMismatch {
                    expected: off,
                    actual: band.len(),
                });
            }
        }
        Ok(Self { lower, diag, upper })
    }

    /// Extract the three central bands of a square matrix.
    ///
    /// Entries outside the bands are ignored.
    pub fn from_matrix(a: &DMatrix<f64>) -> Result<Self> {
        let n = square_dim(a)?;
        let off = n.saturating_sub(1);
        Ok(Self {
            lower: (0..off).map(|i| a[(i + 1, i)]).collect(),
            diag: (0..n).map(|i| a[(i, i)]).collect(),
            upper: (0..off).map(|i| a[(i, i + 1)]).collect(),
        })
    }

    /// Number of unknowns.
    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    /// First sub-diagonal, length N-1.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Main diagonal, length N.
    pub fn diag(&self) -> &[f64] {
        &self.diag
    }

    /// First super-diagonal, length N-1.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Compute `A * x` using only the stored bands.
    pub fn mul_vec(&self, x: &DVector<f64>) -> Result<DVector<f64>> {
        let n = self.dim();
        check_len(n, x)?;
        Ok(DVector::from_fn(n, |i, _| {
            let mut acc = self.diag[i] * x[i];
            if i > 0 {
                acc += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                acc += self.upper[i] * x[i + 1];
            }
            acc
        }))
    }

    /// Solve `A * x = b` by forward elimination and back substitution.
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>> {
        let n = self.dim();
        check_len(n, b)?;
        if n == 0 {
            return Ok(DVector::zeros(0));
        }

        let mut d = self.diag.clone();
        let mut rhs = b.clone();

        // Step 1: forward elimination of the sub-diagonal
        for i in 1..n {
            let pivot = d[i - 1];
            if pivot == 0.0 {
                return Err(Error::ZeroPivot { index: i - 1 });
            }
            let factor = self.lower[i - 1] / pivot;
            d[i] -= self.upper[i - 1] * factor;
            rhs[i] -= rhs[i - 1] * factor;
        }

        // Step 2: back substitution
        let mut x = DVector::zeros(n);
        if d[n - 1] == 0.0 {
            return Err(Error::ZeroPivot { index: n - 1 });
        }
        x[n - 1] = rhs[n - 1] / d[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = (rhs[i] - self.upper[i] * x[i + 1]) / d[i];
        }

        log::debug!("Thomas solve: n = {}", n);
        Ok(x)
    }
}

/// Solve a tri-diagonal system `A * x = b` with the Thomas algorithm.
///
/// `a` must be square and `b` must match its dimension. Entries outside the
/// three central bands of `a` are ignored. `b` is left untouched.
///
/// Returns [`Error::ZeroPivot`] if elimination meets a zero pivot.
pub fn solve_tridiagonal(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    let n = square_dim(a)?;
    check_len(n, b)?;
    TridiagonalSystem::from_matrix(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    fn tridiag(n: usize, lower: f64, diag: f64, upper: f64) -> DMatrix<f64> {
        DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                diag
            } else if i == j + 1 {
                lower
            } else if j == i + 1 {
                upper
            } else {
                0.0
            }
        })
    }

    #[test]
    fn test_solve_laplacian() {
        // [ 2 -1  0]   [1]   [0]
        // [-1  2 -1] * [2] = [0]
        // [ 0 -1  2]   [3]   [4]
        let a = tridiag(3, -1.0, 2.0, -1.0);
        let b = dvector![0.0, 0.0, 4.0];

        let x = solve_tridiagonal(&a, &b).unwrap();

        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!((x[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rhs_untouched() {
        let a = tridiag(5, 1.0, 4.0, 1.0);
        let b = dvector![1.0, 2.0, 3.0, 4.0, 5.0];
        let before = b.clone();

        solve_tridiagonal(&a, &b).unwrap();

        assert_eq!(b, before);
    }

    #[test]
    fn test_round_trip_diagonally_dominant() {
        // Deterministic "random" strictly diagonally dominant bands
        let n = 40;
        let lower: Vec<f64> = (0..n - 1).map(|i| (i as f64 * 1.3).sin()).collect();
        let upper: Vec<f64> = (0..n - 1).map(|i| (i as f64 * 0.7).cos()).collect();
        let diag: Vec<f64> = (0..n).map(|i| 3.0 + (i as f64 * 0.11).sin()).collect();
        let system = TridiagonalSystem::from_bands(lower, diag, upper).unwrap();
        let b = DVector::from_fn(n, |i, _| (i as f64 * 0.37).cos() * 10.0);

        let x = system.solve(&b).unwrap();
        let ax = system.mul_vec(&x).unwrap();

        assert!((ax - &b).norm() < 1e-10);
    }

    #[test]
    fn test_matches_dense_lu() {
        let n = 12;
        let a = tridiag(n, -1.0, 4.0, -2.0);
        let b = DVector::from_fn(n, |i, _| (i + 1) as f64);

        let x = solve_tridiagonal(&a, &b).unwrap();
        let x_ref = a.clone().lu().solve(&b).unwrap();

        for i in 0..n {
            assert!(
                (x[i] - x_ref[i]).abs() < 1e-10,
                "Mismatch at [{}]: thomas={}, lu={}",
                i,
                x[i],
                x_ref[i]
            );
        }
    }

    #[test]
    fn test_ignores_entries_outside_band() {
        let mut a = tridiag(4, 1.0, 5.0, 1.0);
        let b = dvector![1.0, 2.0, 3.0, 4.0];
        let x_banded = solve_tridiagonal(&a, &b).unwrap();

        a[(0, 3)] = 100.0;
        a[(3, 0)] = -100.0;
        let x_polluted = solve_tridiagonal(&a, &b).unwrap();

        assert_eq!(x_banded, x_polluted);
    }

    #[test]
    fn test_dirichlet_boundary_rows() {
        // Rows pre-normalized to 1 on the boundary fix the end values
        let a = dmatrix![
            1.0, 0.0, 0.0, 0.0;
            1.0, -2.0, 1.0, 0.0;
            0.0, 1.0, -2.0, 1.0;
            0.0, 0.0, 0.0, 1.0
        ];
        let b = dvector![300.0, 0.0, 0.0, 350.0];

        let x = solve_tridiagonal(&a, &b).unwrap();

        assert!((x[0] - 300.0).abs() < 1e-10);
        assert!((x[3] - 350.0).abs() < 1e-10);
        // Linear profile between the boundaries
        assert!((x[1] - 950.0 / 3.0).abs() < 1e-10);
        assert!((x[2] - 1000.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_unknown() {
        let a = dmatrix![4.0];
        let b = dvector![2.0];
        let x = solve_tridiagonal(&a, &b).unwrap();
        assert!((x[0] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_empty_system() {
        let a = DMatrix::<f64>::zeros(0, 0);
        let b = DVector::<f64>::zeros(0);
        assert_eq!(solve_tridiagonal(&a, &b).unwrap().len(), 0);
    }

    #[test]
    fn test_zero_pivot() {
        let a = dmatrix![0.0, 1.0; 1.0, 2.0];
        let b = dvector![1.0, 1.0];
        assert_eq!(solve_tridiagonal(&a, &b), Err(Error::ZeroPivot { index: 0 }));
    }

    #[test]
    fn test_zero_pivot_after_elimination() {
        // d[1] - u[0] * l[0] / d[0] = 1 - 1 * 1 / 1 = 0
        let a = dmatrix![1.0, 1.0; 1.0, 1.0];
        let b = dvector![1.0, 2.0];
        assert_eq!(solve_tridiagonal(&a, &b), Err(Error::ZeroPivot { index: 1 }));
    }

    #[test]
    fn test_not_square() {
        let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
        let b = dvector![1.0, 2.0];
        assert!(matches!(
            solve_tridiagonal(&a, &b),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = tridiag(3, 1.0, 4.0, 1.0);
        let b = dvector![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            solve_tridiagonal(&a, &b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_from_bands_rejects_bad_lengths() {
        let result = TridiagonalSystem::from_bands(vec![1.0], vec![1.0, 2.0, 3.0], vec![1.0, 1.0]);
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_from_matrix_extracts_bands() {
        let a = dmatrix![
            1.0, 2.0, 0.0;
            3.0, 4.0, 5.0;
            0.0, 6.0, 7.0
        ];
        let system = TridiagonalSystem::from_matrix(&a).unwrap();
        assert_eq!(system.lower(), &[3.0, 6.0]);
        assert_eq!(system.diag(), &[1.0, 4.0, 7.0]);
        assert_eq!(system.upper(), &[2.0, 5.0]);
    }
}
