//! Sampled airfoil surface coordinates.

use super::CstCoefficients;
use super::error::CstError;
use super::transform::coords2cst;

/// Tolerance on the chord range [0, 1] and on station ordering.
pub(crate) const STATION_TOL: f64 = 1e-9;

/// Upper and lower surface ordinates at shared chordwise stations.
///
/// The camber line `y_c = (y_u + y_l) / 2` and thickness `t = y_u - y_l`
/// are derived once at construction. Instances are immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceCoordinates {
    x: Vec<f64>,
    y_u: Vec<f64>,
    y_l: Vec<f64>,
    y_c: Vec<f64>,
    t: Vec<f64>,
}

impl SurfaceCoordinates {
    /// Create a coordinate set from stations and both surfaces.
    ///
    /// # Errors
    /// `InvalidInput` if the arrays differ in length, hold fewer than two
    /// stations, contain non-finite values, or the stations are not
    /// non-decreasing within [0, 1].
    pub fn new(x: Vec<f64>, y_u: Vec<f64>, y_l: Vec<f64>) -> Result<Self, CstError> {
        if x.len() != y_u.len() || x.len() != y_l.len() {
            return Err(CstError::invalid_input(format!(
                "station count mismatch: x={}, y_u={}, y_l={}",
                x.len(),
                y_u.len(),
                y_l.len()
            )));
        }
        if x.len() < 2 {
            return Err(CstError::invalid_input(format!(
                "need at least 2 stations, got {}",
                x.len()
            )));
        }
        for i in 0..x.len() {
            if !x[i].is_finite() || !y_u[i].is_finite() || !y_l[i].is_finite() {
                return Err(CstError::invalid_input(format!(
                    "non-finite coordinate at station {}",
                    i
                )));
            }
            if x[i] < -STATION_TOL || x[i] > 1.0 + STATION_TOL {
                return Err(CstError::invalid_input(format!(
                    "station {} at x = {} is outside the chord [0, 1]",
                    i, x[i]
                )));
            }
            if i > 0 && x[i] < x[i - 1] - STATION_TOL {
                return Err(CstError::invalid_input(format!(
                    "stations must be non-decreasing (station {})",
                    i
                )));
            }
        }

        Ok(Self::from_surfaces(x, y_u, y_l))
    }

    /// Build without validation; derived arrays are computed here.
    pub(crate) fn from_surfaces(x: Vec<f64>, y_u: Vec<f64>, y_l: Vec<f64>) -> Self {
        let y_c = y_u
            .iter()
            .zip(y_l.iter())
            .map(|(u, l)| 0.5 * (u + l))
            .collect();
        let t = y_u.iter().zip(y_l.iter()).map(|(u, l)| u - l).collect();
        Self {
            x,
            y_u,
            y_l,
            y_c,
            t,
        }
    }

    /// Build from camber line and thickness: y_u,l = y_c ± t/2.
    pub(crate) fn from_camber_thickness(x: Vec<f64>, y_c: Vec<f64>, t: Vec<f64>) -> Self {
        let y_u = y_c
            .iter()
            .zip(t.iter())
            .map(|(c, t)| c + 0.5 * t)
            .collect();
        let y_l = y_c
            .iter()
            .zip(t.iter())
            .map(|(c, t)| c - 0.5 * t)
            .collect();
        Self {
            x,
            y_u,
            y_l,
            y_c,
            t,
        }
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Chordwise stations.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Upper-surface ordinates.
    pub fn y_upper(&self) -> &[f64] {
        &self.y_u
    }

    /// Lower-surface ordinates.
    pub fn y_lower(&self) -> &[f64] {
        &self.y_l
    }

    /// Camber line (y_u + y_l) / 2.
    pub fn camber(&self) -> &[f64] {
        &self.y_c
    }

    /// Thickness distribution y_u - y_l.
    pub fn thickness(&self) -> &[f64] {
        &self.t
    }

    /// Minimum thickness and the station where it occurs.
    pub fn min_thickness(&self) -> (usize, f64) {
        self.t
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::INFINITY), |acc, (i, t)| if t < acc.1 { (i, t) } else { acc })
    }

    /// True when the thickness is non-negative at every station.
    pub fn is_valid(&self) -> bool {
        self.t.iter().all(|&t| t >= 0.0)
    }

    /// Closed contour from trailing edge over the upper surface to the
    /// leading edge and back along the lower surface.
    ///
    /// `xs = reverse(x) ++ x[1..]`, `ys = reverse(y_u) ++ y_l[1..]`. The
    /// leading-edge station appears once, at index `len() - 1`.
    pub fn contour(&self) -> (Vec<f64>, Vec<f64>) {
        let n = self.x.len();
        let mut xs = Vec::with_capacity(2 * n - 1);
        let mut ys = Vec::with_capacity(2 * n - 1);

        xs.extend(self.x.iter().rev());
        ys.extend(self.y_u.iter().rev());
        xs.extend(self.x.iter().skip(1));
        ys.extend(self.y_l.iter().skip(1));

        (xs, ys)
    }

    /// Fit CST coefficients to this coordinate set.
    pub fn fit(&self, n_ca: usize, n_th: usize) -> Result<CstCoefficients, CstError> {
        coords2cst(&self.x, &self.y_u, &self.y_l, n_ca, n_th)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple() -> SurfaceCoordinates {
        SurfaceCoordinates::new(
            vec![0.0, 0.5, 1.0],
            vec![0.0, 0.06, 0.001],
            vec![0.0, -0.04, -0.001],
        )
        .unwrap()
    }

    #[test]
    fn test_derived_arrays() {
        let c = simple();
        assert_eq!(c.len(), 3);
        assert!((c.camber()[1] - 0.01).abs() < 1e-15);
        assert!((c.thickness()[1] - 0.1).abs() < 1e-15);
        assert!((c.thickness()[2] - 0.002).abs() < 1e-15);
        assert!(c.is_valid());
    }

    #[test]
    fn test_contour_layout() {
        let c = simple();
        let (xs, ys) = c.contour();
        assert_eq!(xs, vec![1.0, 0.5, 0.0, 0.5, 1.0]);
        assert_eq!(ys, vec![0.001, 0.06, 0.0, -0.04, -0.001]);
    }

    #[test]
    fn test_min_thickness() {
        let c = SurfaceCoordinates::new(
            vec![0.0, 0.5, 1.0],
            vec![0.01, 0.05, -0.01],
            vec![0.0, -0.05, 0.0],
        )
        .unwrap();
        let (i, t) = c.min_thickness();
        assert_eq!(i, 2);
        assert!((t + 0.01).abs() < 1e-15);
        assert!(!c.is_valid());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(SurfaceCoordinates::new(vec![0.0, 1.0], vec![0.0], vec![0.0, 0.0]).is_err());
        assert!(SurfaceCoordinates::new(vec![0.0], vec![0.0], vec![0.0]).is_err());
        assert!(
            SurfaceCoordinates::new(vec![0.0, 0.6, 0.5], vec![0.0; 3], vec![0.0; 3]).is_err()
        );
        assert!(SurfaceCoordinates::new(vec![0.0, 1.5], vec![0.0; 2], vec![0.0; 2]).is_err());
        assert!(
            SurfaceCoordinates::new(vec![0.0, 1.0], vec![f64::NAN, 0.0], vec![0.0; 2]).is_err()
        );
    }

    #[test]
    fn test_allows_repeated_stations() {
        let c = SurfaceCoordinates::new(
            vec![0.0, 0.0, 0.5, 1.0],
            vec![0.0, 0.01, 0.05, 0.0],
            vec![0.0, -0.01, -0.05, 0.0],
        );
        assert!(c.is_ok());
    }
}
