//! Piecewise-linear interpolation on sampled data.

/// Linearly interpolate `(xp, fp)` at a single point.
///
/// - If x <= first station: returns first value (clamped)
/// - If x >= last station: returns last value (clamped)
/// - Otherwise: linear interpolation between the bracketing stations
///
/// `xp` must be non-decreasing. Repeated stations are allowed; the value
/// right of the repeat wins. Returns 0 for empty input.
pub fn interp_at(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    let n = xp.len();
    if n == 0 {
        return 0.0;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // First station strictly right of x; xp[j - 1] <= x < xp[j]
    let j = xp.partition_point(|&v| v <= x);
    let i = j - 1;
    let alpha = (x - xp[i]) / (xp[j] - xp[i]);
    fp[i] + alpha * (fp[j] - fp[i])
}

/// Linearly interpolate `(xp, fp)` at every point of `x`.
///
/// # Panics
///
/// Panics if `xp` and `fp` have different lengths.
pub fn interp(x: &[f64], xp: &[f64], fp: &[f64]) -> Vec<f64> {
    assert_eq!(xp.len(), fp.len(), "xp and fp must have same length");
    x.iter().map(|&v| interp_at(v, xp, fp)).collect()
}
