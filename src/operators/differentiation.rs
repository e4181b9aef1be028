//! Finite-difference derivatives on sampled sequences.
//!
//! Derivatives are taken with respect to the sample index (unit spacing):
//! - interior: centered difference (f[i+1] - f[i-1]) / 2, second order
//! - ends: one-sided difference f[1] - f[0] and f[n-1] - f[n-2], first order
//!
//! Index-based derivatives are what curvature estimation on a parametric
//! contour needs: the curvature formula is invariant to the choice of
//! parameter.

/// First derivative of `f` with respect to the sample index.
///
/// Returns a vector of the same length. Sequences shorter than two samples
/// have a zero derivative.
pub fn gradient(f: &[f64]) -> Vec<f64> {
    let n = f.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut df = vec![0.0; n];
    df[0] = f[1] - f[0];
    df[n - 1] = f[n - 1] - f[n - 2];
    for i in 1..n - 1 {
        df[i] = 0.5 * (f[i + 1] - f[i - 1]);
    }
    df
}

/// First derivative of `f` with respect to a non-uniform coordinate `x`.
///
/// Interior points use the second-order non-uniform centered stencil,
/// ends use one-sided differences.
///
/// # Panics
///
/// Panics if `f` and `x` have different lengths.
pub fn gradient_with_spacing(f: &[f64], x: &[f64]) -> Vec<f64> {
    assert_eq!(f.len(), x.len(), "f and x must have same length");

    let n = f.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut df = vec![0.0; n];
    df[0] = (f[1] - f[0]) / (x[1] - x[0]);
    df[n - 1] = (f[n - 1] - f[n - 2]) / (x[n - 1] - x[n - 2]);
    for i in 1..n - 1 {
        let h_l = x[i] - x[i - 1];
        let h_r = x[i + 1] - x[i];
        df[i] = (h_l * h_l * f[i + 1] - h_r * h_r * f[i - 1] + (h_r * h_r - h_l * h_l) * f[i])
            / (h_l * h_r * (h_l + h_r));
    }
    df
}
