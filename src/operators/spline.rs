//! Interpolating cubic spline with exact definite integrals.
//!
//! On each interval [x_i, x_{i+1}] of width h_i the spline is
//! ```text
//! S(x) = M_i r³/(6h) + M_{i+1} s³/(6h) + A_i r + B_i s
//! r = x_{i+1} - x,  s = x - x_i
//! A_i = y_i/h - M_i h/6,  B_i = y_{i+1}/h - M_{i+1} h/6
//! ```
//! where M_i = S''(x_i). Interior rows enforce C² continuity; the two end
//! rows use the not-a-knot condition (S''' continuous across x_1 and
//! x_{n-2}), so any cubic is reproduced exactly.
//!
//! The end conditions are substituted into the first and last continuity
//! rows, leaving a strictly diagonally dominant tridiagonal system in
//! M_1..M_{n-2} that is solved by forward elimination without pivoting.
//!
//! The spline is used for integration only and never extrapolates:
//! integration limits are clamped to [x_0, x_{n-1}].

use thiserror::Error;

/// Error type for spline construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplineError {
    /// Not-a-knot end conditions need at least four stations
    #[error("Cubic spline needs at least 4 stations, got {n}")]
    TooFewPoints { n: usize },

    /// Stations must be strictly increasing
    #[error("Spline stations must be strictly increasing (station {index})")]
    NonIncreasing { index: usize },

    /// Station and value arrays differ in length
    #[error("Spline stations ({stations}) and values ({values}) differ in length")]
    LengthMismatch { stations: usize, values: usize },

    /// Non-finite station or value
    #[error("Spline data contains a non-finite value at station {index}")]
    NonFinite { index: usize },

    /// Second-derivative system produced a non-finite value
    #[error("Spline system is singular (non-finite second derivative at station {index})")]
    Singular { index: usize },
}

/// Not-a-knot interpolating cubic spline.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    /// Stations (strictly increasing)
    x: Vec<f64>,
    /// Values at stations
    y: Vec<f64>,
    /// Second derivatives at stations
    m: Vec<f64>,
    /// cumulative[i] = ∫_{x_0}^{x_i} S dx
    cumulative: Vec<f64>,
}

impl CubicSpline {
    /// Fit a spline through `(x, y)`.
    ///
    /// # Errors
    /// - `LengthMismatch` if `x` and `y` differ in length
    /// - `TooFewPoints` for fewer than 4 stations
    /// - `NonFinite` if any station or value is NaN/Inf
    /// - `NonIncreasing` if stations are not strictly increasing
    /// - `Singular` if the second derivatives are not finite
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch {
                stations: x.len(),
                values: y.len(),
            });
        }
        let n = x.len();
        if n < 4 {
            return Err(SplineError::TooFewPoints { n });
        }
        for i in 0..n {
            if !x[i].is_finite() || !y[i].is_finite() {
                return Err(SplineError::NonFinite { index: i });
            }
            if i > 0 && x[i] <= x[i - 1] {
                return Err(SplineError::NonIncreasing { index: i });
            }
        }

        let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let m = not_a_knot_second_derivatives(&h, y);
        if let Some(index) = m.iter().position(|v| !v.is_finite()) {
            return Err(SplineError::Singular { index });
        }

        let mut spline = Self {
            x: x.to_vec(),
            y: y.to_vec(),
            m,
            cumulative: vec![0.0; n],
        };
        for i in 0..n - 1 {
            spline.cumulative[i + 1] =
                spline.cumulative[i] + spline.segment_integral(i, spline.x[i + 1]);
        }

        Ok(spline)
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction requires at least four stations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Domain covered by the spline: (x_0, x_{n-1}).
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Second derivatives at the stations.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.m
    }

    /// Index of the interval containing u (clamped to valid intervals).
    fn segment(&self, u: f64) -> usize {
        let n = self.x.len();
        self.x
            .partition_point(|&v| v <= u)
            .saturating_sub(1)
            .min(n - 2)
    }

    /// ∫_{x_i}^{u} S dx for u inside interval i.
    fn segment_integral(&self, i: usize, u: f64) -> f64 {
        let h = self.x[i + 1] - self.x[i];
        let s = u - self.x[i];
        let r = self.x[i + 1] - u;
        let a = self.y[i] / h - self.m[i] * h / 6.0;
        let b = self.y[i + 1] / h - self.m[i + 1] * h / 6.0;

        self.m[i] / (24.0 * h) * (h.powi(4) - r.powi(4))
            + self.m[i + 1] / (24.0 * h) * s.powi(4)
            + 0.5 * a * (h * h - r * r)
            + 0.5 * b * s * s
    }

    /// Evaluate the spline at u (clamped to the domain).
    pub fn evaluate(&self, u: f64) -> f64 {
        let (lo, hi) = self.domain();
        let u = u.clamp(lo, hi);
        let i = self.segment(u);

        let h = self.x[i + 1] - self.x[i];
        let s = u - self.x[i];
        let r = self.x[i + 1] - u;
        let a = self.y[i] / h - self.m[i] * h / 6.0;
        let b = self.y[i + 1] / h - self.m[i + 1] * h / 6.0;

        self.m[i] * r.powi(3) / (6.0 * h) + self.m[i + 1] * s.powi(3) / (6.0 * h) + a * r + b * s
    }

    /// ∫_{x_0}^{u} S dx with u clamped to the domain.
    fn antiderivative(&self, u: f64) -> f64 {
        let (lo, hi) = self.domain();
        let u = u.clamp(lo, hi);
        let i = self.segment(u);
        self.cumulative[i] + self.segment_integral(i, u)
    }

    /// Definite integral ∫_a^b S dx.
    ///
    /// Limits outside the data range are clamped; b < a gives the negated
    /// integral.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

/// Second derivatives of the not-a-knot spline through `y` with spacing `h`.
///
/// Requires at least three positive intervals.
fn not_a_knot_second_derivatives(h: &[f64], y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let k = n - 2;

    // Row j is the continuity condition at station j + 1
    let mut sub = vec![0.0; k];
    let mut diag = vec![0.0; k];
    let mut sup = vec![0.0; k];
    let mut rhs = vec![0.0; k];
    for j in 0..k {
        let i = j + 1;
        sub[j] = h[i - 1];
        diag[j] = 2.0 * (h[i - 1] + h[i]);
        sup[j] = h[i];
        rhs[j] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    // M_0 = ((h0 + h1) M_1 - h0 M_2) / h1
    let (h0, h1) = (h[0], h[1]);
    sub[0] = 0.0;
    diag[0] = (h0 + h1) * (h0 + 2.0 * h1) / h1;
    sup[0] = (h1 - h0) * (h1 + h0) / h1;

    // M_{n-1} = ((ha + hb) M_{n-2} - hb M_{n-3}) / ha
    let (ha, hb) = (h[n - 3], h[n - 2]);
    sub[k - 1] = (ha - hb) * (ha + hb) / ha;
    diag[k - 1] = (ha + hb) * (2.0 * ha + hb) / ha;
    sup[k - 1] = 0.0;

    for j in 1..k {
        let w = sub[j] / diag[j - 1];
        diag[j] -= w * sup[j - 1];
        rhs[j] -= w * rhs[j - 1];
    }
    let mut interior = vec![0.0; k];
    interior[k - 1] = rhs[k - 1] / diag[k - 1];
    for j in (0..k - 1).rev() {
        interior[j] = (rhs[j] - sup[j] * interior[j + 1]) / diag[j];
    }

    let m_first = ((h0 + h1) * interior[0] - h0 * interior[1]) / h1;
    let m_last = ((ha + hb) * interior[k - 1] - hb * interior[k - 2]) / ha;

    let mut m = Vec::with_capacity(n);
    m.push(m_first);
    m.extend_from_slice(&interior);
    m.push(m_last);
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::cosine_spacing;

    const TOL: f64 = 1e-10;

    fn cubic(x: f64) -> f64 {
        2.0 * x.powi(3) - x * x + 0.5 * x + 1.0
    }

    #[test]
    fn test_reproduces_cubic() {
        let x = vec![0.0, 0.1, 0.3, 0.35, 0.6, 0.8, 1.0];
        let y: Vec<f64> = x.iter().map(|&v| cubic(v)).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        for &u in &[0.0, 0.05, 0.33, 0.5, 0.91, 1.0] {
            assert!(
                (s.evaluate(u) - cubic(u)).abs() < TOL,
                "Spline should reproduce cubic at {}: {} vs {}",
                u,
                s.evaluate(u),
                cubic(u)
            );
        }
    }

    #[test]
    fn test_cubic_integral_exact() {
        let x = cosine_spacing(12);
        let y: Vec<f64> = x.iter().map(|&v| cubic(v)).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        // ∫_0^1 (2x³ - x² + x/2 + 1) dx = 1/2 - 1/3 + 1/4 + 1
        let exact = 0.5 - 1.0 / 3.0 + 0.25 + 1.0;
        assert!((s.integral(0.0, 1.0) - exact).abs() < TOL);

        // Partial interval: ∫_0.2^0.7
        let anti = |v: f64| 0.5 * v.powi(4) - v.powi(3) / 3.0 + 0.25 * v * v + v;
        assert!((s.integral(0.2, 0.7) - (anti(0.7) - anti(0.2))).abs() < TOL);
    }

    #[test]
    fn test_integral_additive_and_antisymmetric() {
        let x = cosine_spacing(30);
        let y: Vec<f64> = x.iter().map(|&v| v.sqrt() * (1.0 - v)).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        let whole = s.integral(0.0, 1.0);
        let parts: f64 = (0..4)
            .map(|i| s.integral(i as f64 * 0.25, (i + 1) as f64 * 0.25))
            .sum();
        assert!((whole - parts).abs() < 1e-14);
        assert!((s.integral(0.7, 0.2) + s.integral(0.2, 0.7)).abs() < 1e-15);
    }

    #[test]
    fn test_integral_clamps_limits() {
        let x = vec![0.0, 0.25, 0.5, 0.75, 1.0];
        let y = vec![1.0; 5];
        let s = CubicSpline::new(&x, &y).unwrap();
        assert!((s.integral(-1.0, 2.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_interpolates_data() {
        let x = cosine_spacing(20);
        let y: Vec<f64> = x.iter().map(|&v| (3.0 * v).sin()).collect();
        let s = CubicSpline::new(&x, &y).unwrap();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            assert!((s.evaluate(xi) - yi).abs() < TOL);
        }
    }

    #[test]
    fn test_dense_cosine_stations() {
        // ∫_0^1 sin(3x) dx = (1 - cos 3) / 3
        let exact = (1.0 - 3.0_f64.cos()) / 3.0;
        for n in [16, 17, 40, 100, 200] {
            let x = cosine_spacing(n);
            let y: Vec<f64> = x.iter().map(|&v| (3.0 * v).sin()).collect();
            let s = CubicSpline::new(&x, &y).unwrap();

            assert!(
                s.second_derivatives().iter().all(|m| m.is_finite()),
                "n={}: non-finite second derivative",
                n
            );
            let integral = s.integral(0.0, 1.0);
            assert!(
                (integral - exact).abs() < 1e-5,
                "n={}: integral {} vs {}",
                n,
                integral,
                exact
            );
        }
    }

    #[test]
    fn test_reproduces_cubic_on_dense_stations() {
        let x = cosine_spacing(100);
        let y: Vec<f64> = x.iter().map(|&v| cubic(v)).collect();
        let s = CubicSpline::new(&x, &y).unwrap();

        for (&xi, &mi) in x.iter().zip(s.second_derivatives()) {
            assert!((mi - (12.0 * xi - 2.0)).abs() < 1e-6, "M({}) = {}", xi, mi);
        }
        for &u in &[0.001, 0.2, 0.5, 0.77, 0.999] {
            assert!((s.evaluate(u) - cubic(u)).abs() < 1e-9);
        }
        let exact = 0.5 - 1.0 / 3.0 + 0.25 + 1.0;
        assert!((s.integral(0.0, 1.0) - exact).abs() < TOL);
    }

    #[test]
    fn test_four_stations_minimum() {
        let x = vec![0.0, 0.3, 0.5, 1.0];
        let y: Vec<f64> = x.iter().map(|&v| cubic(v)).collect();
        let s = CubicSpline::new(&x, &y).unwrap();
        assert!((s.evaluate(0.8) - cubic(0.8)).abs() < TOL);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            CubicSpline::new(&[0.0, 0.5, 1.0], &[0.0, 1.0, 0.0]).unwrap_err(),
            SplineError::TooFewPoints { n: 3 }
        );
        assert_eq!(
            CubicSpline::new(&[0.0, 0.5, 0.5, 1.0], &[0.0; 4]).unwrap_err(),
            SplineError::NonIncreasing { index: 2 }
        );
        assert!(matches!(
            CubicSpline::new(&[0.0, 0.5, 1.0], &[0.0; 4]),
            Err(SplineError::LengthMismatch { .. })
        ));
        assert!(matches!(
            CubicSpline::new(&[0.0, 0.2, 0.5, 1.0], &[0.0, f64::NAN, 0.0, 0.0]),
            Err(SplineError::NonFinite { index: 1 })
        ));
    }
}
