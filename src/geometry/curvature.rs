//! Contour curvature and leading-edge radius.
//!
//! For a parametric curve (x(s), y(s)) the unsigned curvature is
//! ```text
//! κ = |x' y'' - x'' y'| / (x'² + y'²)^(3/2)
//! ```
//! Derivatives are finite differences with respect to the contour index.
//! The leading-edge radius is 1/κ at the leading-edge station.

use crate::cst::SurfaceCoordinates;
use crate::operators::gradient;

/// Unsigned curvature at every point of a sampled contour.
///
/// Points where the first derivative vanishes yield NaN or Inf; callers
/// decide how to treat them.
///
/// # Panics
///
/// Panics if `xs` and `ys` have different lengths.
pub fn contour_curvature(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    assert_eq!(xs.len(), ys.len(), "xs and ys must have same length");

    let dx = gradient(xs);
    let dy = gradient(ys);
    let d2x = gradient(&dx);
    let d2y = gradient(&dy);

    (0..xs.len())
        .map(|i| {
            let speed_sq = dx[i] * dx[i] + dy[i] * dy[i];
            (d2x[i] * dy[i] - dx[i] * d2y[i]).abs() / speed_sq.powf(1.5)
        })
        .collect()
}

/// Leading-edge radius of an airfoil.
///
/// The contour runs trailing edge → upper surface → leading edge → lower
/// surface → trailing edge; the leading-edge station is its midpoint.
///
/// A non-finite or zero curvature there (locally flat or ill-sampled
/// nose) saturates to a radius of 0 instead of propagating NaN/Inf.
pub fn leading_edge_radius(coords: &SurfaceCoordinates) -> f64 {
    if coords.len() < 2 {
        return 0.0;
    }
    let (xs, ys) = coords.contour();
    let i_le = coords.len() - 1;

    let kappa = contour_curvature(&xs, &ys)[i_le];
    if !kappa.is_finite() || kappa == 0.0 {
        log::debug!(
            "degenerate leading-edge curvature {}; reporting zero radius",
            kappa
        );
        return 0.0;
    }
    1.0 / kappa
}
