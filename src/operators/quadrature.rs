//! Trapezoidal quadrature over sampled data.
//!
//! ∫ y dx ≈ Σᵢ (x_{i+1} - x_i) (y_i + y_{i+1}) / 2
//!
//! Second-order accurate for smooth integrands; the station spacing may
//! be non-uniform.

/// Integrate samples `y` over stations `x` with the trapezoidal rule.
///
/// Returns 0 for fewer than two samples.
///
/// # Panics
///
/// Panics if `x` and `y` have different lengths.
pub fn trapezoid(y: &[f64], x: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "x and y must have same length");

    x.windows(2)
        .zip(y.windows(2))
        .map(|(xw, yw)| 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]))
        .sum()
}

/// Cumulative trapezoidal integral, starting at 0 at the first station.
pub fn cumulative_trapezoid(y: &[f64], x: &[f64]) -> Vec<f64> {
    assert_eq!(x.len(), y.len(), "x and y must have same length");

    let mut out = Vec::with_capacity(x.len());
    let mut acc = 0.0;
    if !x.is_empty() {
        out.push(0.0);
    }
    for (xw, yw) in x.windows(2).zip(y.windows(2)) {
        acc += 0.5 * (xw[1] - xw[0]) * (yw[0] + yw[1]);
        out.push(acc);
    }
    out
}
