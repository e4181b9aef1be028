//! Forward and inverse CST transforms.
//!
//! # Representation
//!
//! ```text
//! y_c(x) = C_ca(x) Σᵢ a_ca,i B_{n_ca-1,i}(x)
//! t(x)   = C_th(x) Σᵢ a_th,i B_{n_th-1,i}(x) + x t_te
//! y_u    = y_c + t/2
//! y_l    = y_c - t/2
//! ```
//!
//! with C_ca = x(1-x) and C_th = √x (1-x).
//!
//! # Inverse
//!
//! The trailing-edge thickness is read off (or linearly extrapolated to)
//! x = 1. The camber line and the thickness residual t - x t_te are then
//! two independent linear least-squares problems in the Bernstein weights.

use super::coordinates::STATION_TOL;
use super::error::CstError;
use super::{CstCoefficients, SurfaceCoordinates};
use crate::basis::ShapeMatrix;
use crate::polynomial::{ClassFunction, cosine_spacing};

/// Default number of chordwise stations for forward evaluation.
pub const DEFAULT_N_COORDS: usize = 100;

/// Thickness below this is treated as negative (round-off allowance).
const THICKNESS_TOL: f64 = -1e-12;

/// Evaluate CST coefficients at the default number of stations.
///
/// See [`cst2coords_with`].
pub fn cst2coords(a_ca: &[f64], a_th: &[f64], t_te: f64) -> Result<SurfaceCoordinates, CstError> {
    cst2coords_with(a_ca, a_th, t_te, DEFAULT_N_COORDS)
}

/// Evaluate CST coefficients at `n_coords` cosine-spaced stations.
///
/// # Errors
/// - `InvalidInput` if a coefficient vector is empty, a value is not
///   finite, `t_te < 0`, or `n_coords < 3`
/// - `InvalidShape` if the thickness is negative at any station; it is
///   never clamped
pub fn cst2coords_with(
    a_ca: &[f64],
    a_th: &[f64],
    t_te: f64,
    n_coords: usize,
) -> Result<SurfaceCoordinates, CstError> {
    if n_coords < 3 {
        return Err(CstError::invalid_input(format!(
            "need at least 3 stations, got {}",
            n_coords
        )));
    }
    let coeffs = CstCoefficients::new(a_ca.to_vec(), a_th.to_vec(), t_te);
    coeffs.validate()?;

    let x = cosine_spacing(n_coords);

    let camber = ShapeMatrix::new(a_ca.len(), &x, ClassFunction::CAMBER);
    let y_c = camber.evaluate(a_ca);

    let thickness_matrix = ShapeMatrix::new(a_th.len(), &x, ClassFunction::THICKNESS);
    let t: Vec<f64> = thickness_matrix
        .evaluate(a_th)
        .into_iter()
        .zip(x.iter())
        .map(|(t, &xi)| t + xi * t_te)
        .collect();

    if let Some((station, &thickness)) = t.iter().enumerate().find(|(_, t)| **t < THICKNESS_TOL) {
        return Err(CstError::InvalidShape {
            station,
            x: x[station],
            thickness,
        });
    }

    Ok(SurfaceCoordinates::from_camber_thickness(x, y_c, t))
}

/// Fit CST coefficients to sampled surface coordinates.
///
/// The stations need not match the forward-transform grid. At least
/// `max(n_ca, n_th)` distinct stations strictly inside (0, 1) are
/// required.
///
/// # Errors
/// - `InvalidInput` for malformed coordinates or zero coefficient counts
/// - `FitFailure` if either least-squares system is underdetermined or
///   singular
pub fn coords2cst(
    x: &[f64],
    y_u: &[f64],
    y_l: &[f64],
    n_ca: usize,
    n_th: usize,
) -> Result<CstCoefficients, CstError> {
    if n_ca == 0 || n_th == 0 {
        return Err(CstError::invalid_input(format!(
            "coefficient counts must be positive, got n_ca={} n_th={}",
            n_ca, n_th
        )));
    }
    let coords = SurfaceCoordinates::new(x.to_vec(), y_u.to_vec(), y_l.to_vec())?;
    let x = coords.x();
    let t = coords.thickness();

    let t_te = trailing_edge_thickness(x, t);

    let residual: Vec<f64> = t
        .iter()
        .zip(x.iter())
        .map(|(&t, &xi)| t - xi * t_te)
        .collect();
    let a_th = fit_shape(n_th, x, &residual, ClassFunction::THICKNESS)?;
    let a_ca = fit_shape(n_ca, x, coords.camber(), ClassFunction::CAMBER)?;

    log::debug!(
        "fitted CST coefficients: n_ca={}, n_th={}, t_te={:.3e} from {} stations",
        n_ca,
        n_th,
        t_te,
        x.len()
    );

    Ok(CstCoefficients { a_ca, a_th, t_te })
}

/// Least-squares Bernstein weights for one shape.
fn fit_shape(
    n_coeffs: usize,
    x: &[f64],
    values: &[f64],
    class: ClassFunction,
) -> Result<Vec<f64>, CstError> {
    let matrix = ShapeMatrix::new(n_coeffs, x, class);
    matrix.least_squares(values).ok_or(CstError::FitFailure {
        unknowns: n_coeffs,
        distinct_stations: matrix.informative_stations(),
    })
}

/// Estimate the trailing-edge thickness from sampled thickness.
///
/// Uses the value at the last station when it lies on x = 1, otherwise
/// extrapolates linearly from the last two distinct stations. The result
/// is clamped to be non-negative.
pub fn trailing_edge_thickness(x: &[f64], t: &[f64]) -> f64 {
    let n = x.len();
    if n == 0 {
        return 0.0;
    }
    let last = n - 1;

    let estimate = if (x[last] - 1.0).abs() <= STATION_TOL {
        t[last]
    } else {
        match (0..last).rev().find(|&k| x[k] < x[last] - STATION_TOL) {
            Some(k) => t[k] + (t[last] - t[k]) * (1.0 - x[k]) / (x[last] - x[k]),
            None => t[last],
        }
    };

    if estimate < 0.0 {
        log::warn!(
            "trailing-edge thickness estimate {:.3e} is negative; clamping to 0",
            estimate
        );
        0.0
    } else {
        estimate
    }
}
