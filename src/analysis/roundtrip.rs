//! Round-trip error between a reference airfoil and its CST reconstruction.

use std::fmt;

use crate::cst::{CstError, SurfaceCoordinates};
use crate::operators::interp;

/// RMS error of each surface quantity, measured at the reference stations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundTripMetrics {
    /// Stations (reconstructed x interpolated onto the reference x)
    pub rms_x: f64,
    /// Upper surface
    pub rms_y_u: f64,
    /// Lower surface
    pub rms_y_l: f64,
    /// Camber line
    pub rms_y_c: f64,
    /// Thickness
    pub rms_t: f64,
    /// Number of reference stations
    pub n_points: usize,
}

impl RoundTripMetrics {
    /// Compare a reconstruction against a reference coordinate set.
    ///
    /// The reconstruction is linearly interpolated onto the reference
    /// stations, so the two sets need not share a grid.
    pub fn compute(reference: &SurfaceCoordinates, reconstructed: &SurfaceCoordinates) -> Self {
        let x = reference.x();
        let rms = |estimate: &[f64], truth: &[f64]| {
            rms_error(&interp(x, reconstructed.x(), estimate), truth)
        };

        Self {
            rms_x: rms(reconstructed.x(), x),
            rms_y_u: rms(reconstructed.y_upper(), reference.y_upper()),
            rms_y_l: rms(reconstructed.y_lower(), reference.y_lower()),
            rms_y_c: rms(reconstructed.camber(), reference.camber()),
            rms_t: rms(reconstructed.thickness(), reference.thickness()),
            n_points: x.len(),
        }
    }

    /// Fit CST coefficients to `coords`, re-evaluate them on the default
    /// grid and compare against `coords`.
    pub fn fit_and_compare(
        coords: &SurfaceCoordinates,
        n_ca: usize,
        n_th: usize,
    ) -> Result<Self, CstError> {
        let reconstructed = coords.fit(n_ca, n_th)?.to_coordinates()?;
        Ok(Self::compute(coords, &reconstructed))
    }

    /// Largest of the per-quantity errors.
    pub fn max_rms(&self) -> f64 {
        [
            self.rms_x,
            self.rms_y_u,
            self.rms_y_l,
            self.rms_y_c,
            self.rms_t,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

impl fmt::Display for RoundTripMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round-trip RMS ({} stations)", self.n_points)?;
        writeln!(f, "  x:   {:.3e}", self.rms_x)?;
        writeln!(f, "  y_u: {:.3e}", self.rms_y_u)?;
        writeln!(f, "  y_l: {:.3e}", self.rms_y_l)?;
        writeln!(f, "  y_c: {:.3e}", self.rms_y_c)?;
        write!(f, "  t:   {:.3e}", self.rms_t)
    }
}

fn rms_error(estimate: &[f64], truth: &[f64]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = estimate
        .iter()
        .zip(truth.iter())
        .map(|(e, t)| (e - t).powi(2))
        .sum();
    (sum_sq / truth.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::{DEFAULT_N_COORDS, cst2coords_with};

    const TOL: f64 = 1e-10;

    #[test]
    fn test_identical_sets() {
        let coords = cst2coords_with(&[0.1, 0.05], &[0.15, 0.1, 0.12], 0.0, 50).unwrap();
        let m = RoundTripMetrics::compute(&coords, &coords);
        assert!(m.max_rms() < TOL);
        assert_eq!(m.n_points, 50);
    }

    #[test]
    fn test_constant_offset() {
        let x = vec![0.0, 0.5, 1.0];
        let reference = SurfaceCoordinates::new(x.clone(), vec![0.0, 0.05, 0.0], vec![0.0; 3]).unwrap();
        let shifted = SurfaceCoordinates::new(x, vec![0.01, 0.06, 0.01], vec![0.0; 3]).unwrap();

        let m = RoundTripMetrics::compute(&reference, &shifted);
        assert!((m.rms_y_u - 0.01).abs() < TOL);
        assert!((m.rms_t - 0.01).abs() < TOL);
        assert!((m.rms_y_c - 0.005).abs() < TOL);
        assert!(m.rms_y_l.abs() < TOL);
        assert!((m.max_rms() - 0.01).abs() < TOL);
    }

    #[test]
    fn test_fit_and_compare_exact_family() {
        // A CST shape on the default grid is reproduced by a fit of the same order
        let coords = cst2coords_with(&[0.1, 0.05, 0.08], &[0.15, 0.1, 0.12], 0.0, DEFAULT_N_COORDS)
            .unwrap();
        let m = RoundTripMetrics::fit_and_compare(&coords, 3, 3).unwrap();
        assert!(m.max_rms() < 1e-8, "{}", m);
    }
}
