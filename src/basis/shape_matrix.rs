//! CST design matrix for shape evaluation and fitting.
//!
//! The design matrix V connects coefficients and sampled ordinates:
//! - V[i,j] = C(x_i) B_{n,j}(x_i), with C the class function and B the
//!   Bernstein polynomials of degree n = n_coeffs - 1
//! - ordinates = V * coeffs
//! - coeffs = argmin ||V * a - ordinates||₂ (least squares)
//!
//! Rows at x = 0 and x = 1 are identically zero because the class
//! function vanishes there; they carry no information for a fit.

use crate::polynomial::{ClassFunction, bernstein_basis};
use faer::{Mat, linalg::solvers::Solve};

/// Stations are treated as distinct when they differ by more than this.
const STATION_TOL: f64 = 1e-12;

/// Smallest accepted ratio of the smallest to the largest LU pivot of V'V.
///
/// Well-spread stations stay above 1e-8 up to 16 coefficients; clustered
/// stations that are distinct but numerically coincident fall far below.
const PIVOT_TOL: f64 = 1e-12;

/// CST design matrix over a fixed set of stations.
#[derive(Clone)]
pub struct ShapeMatrix {
    /// Design matrix: V[i,j] = C(x_i) B_{n,j}(x_i)
    pub v: Mat<f64>,
    /// Stations the rows were built at
    pub stations: Vec<f64>,
    /// Class function applied to every row
    pub class: ClassFunction,
    /// Number of shape coefficients (columns)
    pub n_coeffs: usize,
}

impl ShapeMatrix {
    /// Build the design matrix for `n_coeffs` Bernstein terms.
    ///
    /// # Panics
    ///
    /// Panics if `n_coeffs` is zero.
    pub fn new(n_coeffs: usize, stations: &[f64], class: ClassFunction) -> Self {
        assert!(n_coeffs > 0, "Need at least one shape coefficient");

        let degree = n_coeffs - 1;
        let mut v = Mat::zeros(stations.len(), n_coeffs);

        for (i, &x) in stations.iter().enumerate() {
            let c = class.evaluate(x);
            for (j, b) in bernstein_basis(degree, x).into_iter().enumerate() {
                v[(i, j)] = c * b;
            }
        }

        Self {
            v,
            stations: stations.to_vec(),
            class,
            n_coeffs,
        }
    }

    /// Number of rows (stations).
    pub fn n_stations(&self) -> usize {
        self.stations.len()
    }

    /// Evaluate the shape V * coeffs at every station.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs.len()` differs from the number of columns.
    pub fn evaluate(&self, coeffs: &[f64]) -> Vec<f64> {
        assert_eq!(coeffs.len(), self.n_coeffs, "Coefficient count mismatch");

        (0..self.n_stations())
            .map(|i| {
                let mut sum = 0.0;
                for (j, &a) in coeffs.iter().enumerate() {
                    sum += self.v[(i, j)] * a;
                }
                sum
            })
            .collect()
    }

    /// Number of distinct stations strictly inside (0, 1).
    ///
    /// These are the rows where the class function is nonzero. The matrix
    /// has full column rank exactly when this count reaches `n_coeffs`,
    /// since a degree n-1 polynomial is fixed by n distinct samples.
    pub fn informative_stations(&self) -> usize {
        let mut interior: Vec<f64> = self
            .stations
            .iter()
            .copied()
            .filter(|&x| x > STATION_TOL && x < 1.0 - STATION_TOL)
            .collect();
        interior.sort_by(f64::total_cmp);
        interior.dedup_by(|a, b| (*a - *b).abs() <= STATION_TOL);
        interior.len()
    }

    /// Solve the least-squares problem min ||V a - values||₂.
    ///
    /// Builds and solves the normal equations (V'V) a = V' values with a
    /// full-pivot LU. Returns `None` when the system is rank deficient,
    /// numerically singular (pivot ratio below `PIVOT_TOL`), or the solution
    /// is not finite.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the number of stations.
    pub fn least_squares(&self, values: &[f64]) -> Option<Vec<f64>> {
        let n_data = self.n_stations();
        let n_unknowns = self.n_coeffs;
        assert_eq!(values.len(), n_data, "One value per station required");

        if self.informative_stations() < n_unknowns {
            return None;
        }

        // V'V (symmetric, n_unknowns × n_unknowns)
        let mut vtv = Mat::<f64>::zeros(n_unknowns, n_unknowns);
        for i in 0..n_unknowns {
            for j in i..n_unknowns {
                let mut sum = 0.0;
                for k in 0..n_data {
                    sum += self.v[(k, i)] * self.v[(k, j)];
                }
                vtv[(i, j)] = sum;
                vtv[(j, i)] = sum;
            }
        }

        // V' y
        let mut vty = Mat::<f64>::zeros(n_unknowns, 1);
        for i in 0..n_unknowns {
            let mut sum = 0.0;
            for k in 0..n_data {
                sum += self.v[(k, i)] * values[k];
            }
            vty[(i, 0)] = sum;
        }

        let lu = vtv.as_ref().full_piv_lu();

        // Full pivoting orders |U_ii| by decreasing magnitude
        let u = lu.U();
        let (mut pivot_max, mut pivot_min) = (0.0_f64, f64::INFINITY);
        for i in 0..n_unknowns {
            let p = u[(i, i)].abs();
            pivot_max = pivot_max.max(p);
            pivot_min = pivot_min.min(p);
        }
        if !(pivot_max > 0.0 && pivot_min / pivot_max >= PIVOT_TOL) {
            return None;
        }

        let a = lu.solve(&vty);

        let coeffs: Vec<f64> = (0..n_unknowns).map(|i| a[(i, 0)]).collect();
        if coeffs.iter().all(|c| c.is_finite()) {
            Some(coeffs)
        } else {
            None
        }
    }
}
