//! Geometric metrics of an airfoil section.
//!
//! - Thickness-to-chord ratio: t/c = max(t)
//! - Cross-sectional area: A = ∫₀¹ t dx (trapezoidal rule)
//! - Leading-edge radius: r = 1/κ at the nose
//! - Bin areas: mean thickness over equal-width chordwise bins, from the
//!   exact integral of a cubic spline through t(x)

use std::fmt;

use super::GeometryError;
use super::curvature::leading_edge_radius;
use crate::cst::{SurfaceCoordinates, format_array};
use crate::operators::{CubicSpline, trapezoid};

/// Geometric quantities used as optimization constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryMetrics {
    /// Thickness-to-chord ratio (maximum thickness)
    pub t_c: f64,
    /// Cross-sectional area enclosed by the surfaces
    pub a_cs: f64,
    /// Leading-edge radius (0 for a degenerate nose)
    pub r_le: f64,
    /// Mean thickness per chordwise bin (empty when bins are disabled)
    pub a_bins: Vec<f64>,
}

impl GeometryMetrics {
    /// Compute all metrics from a coordinate set.
    ///
    /// `n_area_bins = 0` disables the bin integrals.
    ///
    /// # Errors
    /// `Spline` if bins are requested and the stations are not strictly
    /// increasing or fewer than four.
    pub fn from_coordinates(
        coords: &SurfaceCoordinates,
        n_area_bins: usize,
    ) -> Result<Self, GeometryError> {
        Ok(Self {
            t_c: thickness_ratio(coords),
            a_cs: cross_sectional_area(coords),
            r_le: leading_edge_radius(coords),
            a_bins: area_bins(coords, n_area_bins)?,
        })
    }

    /// Number of bins.
    pub fn n_area_bins(&self) -> usize {
        self.a_bins.len()
    }

    /// Smallest bin mean thickness, if bins were computed.
    pub fn min_bin(&self) -> Option<f64> {
        self.a_bins.iter().copied().reduce(f64::min)
    }
}

impl fmt::Display for GeometryMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t_c: {:.4}", self.t_c)?;
        writeln!(f, "r_le: {:.4}", self.r_le)?;
        writeln!(f, "A_cs: {:.4}", self.a_cs)?;
        write!(f, "A_bins: {}", format_array(&self.a_bins))
    }
}

/// Maximum thickness. Returns 0 for an empty coordinate set.
pub fn thickness_ratio(coords: &SurfaceCoordinates) -> f64 {
    coords
        .thickness()
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Area between the surfaces, ∫ t dx by the trapezoidal rule.
pub fn cross_sectional_area(coords: &SurfaceCoordinates) -> f64 {
    trapezoid(coords.thickness(), coords.x())
}

/// Mean thickness over `n_bins` equal-width bins of the chord [0, 1].
///
/// Each entry is ∫_bin t dx / bin_width with t interpolated by a
/// not-a-knot cubic spline. Returns an empty vector for `n_bins = 0`.
///
/// # Errors
/// - `Spline` if the thickness spline cannot be built
/// - `NonFiniteBin` if a bin integral overflows
pub fn area_bins(coords: &SurfaceCoordinates, n_bins: usize) -> Result<Vec<f64>, GeometryError> {
    if n_bins == 0 {
        return Ok(Vec::new());
    }

    let spline = CubicSpline::new(coords.x(), coords.thickness())?;
    let dx = 1.0 / n_bins as f64;

    let bins: Vec<f64> = (0..n_bins)
        .map(|i| spline.integral(i as f64 * dx, (i + 1) as f64 * dx) / dx)
        .collect();
    if let Some(bin) = bins.iter().position(|b| !b.is_finite()) {
        return Err(GeometryError::NonFiniteBin { bin });
    }
    Ok(bins)
}
