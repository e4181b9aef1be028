//! Static configuration of a geometry problem.

use super::GeometryError;
use crate::cst::DEFAULT_N_COORDS;

/// Problem dimensions fixed for the lifetime of an optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryConfig {
    /// Number of camber coefficients
    pub n_ca: usize,
    /// Number of thickness coefficients
    pub n_th: usize,
    /// Number of chordwise bins (0 disables bin output)
    pub n_area_bins: usize,
    /// Number of stations for forward evaluation
    pub n_coords: usize,
}

impl Default for GeometryConfig {
    /// - n_ca: 6
    /// - n_th: 6
    /// - n_area_bins: 5
    /// - n_coords: 100
    fn default() -> Self {
        Self {
            n_ca: 6,
            n_th: 6,
            n_area_bins: 5,
            n_coords: DEFAULT_N_COORDS,
        }
    }
}

impl GeometryConfig {
    /// Create a configuration with the given coefficient counts and
    /// default bins and stations.
    pub fn new(n_ca: usize, n_th: usize) -> Self {
        Self {
            n_ca,
            n_th,
            ..Self::default()
        }
    }

    /// Set number of camber coefficients.
    pub fn with_n_ca(mut self, n_ca: usize) -> Self {
        self.n_ca = n_ca;
        self
    }

    /// Set number of thickness coefficients.
    pub fn with_n_th(mut self, n_th: usize) -> Self {
        self.n_th = n_th;
        self
    }

    /// Set number of area bins (0 disables them).
    pub fn with_area_bins(mut self, n_area_bins: usize) -> Self {
        self.n_area_bins = n_area_bins;
        self
    }

    /// Set number of forward-evaluation stations.
    pub fn with_n_coords(mut self, n_coords: usize) -> Self {
        self.n_coords = n_coords;
        self
    }

    /// Length of the flat design vector `[a_ca..., a_th..., t_te]`.
    pub fn n_design_variables(&self) -> usize {
        self.n_ca + self.n_th + 1
    }

    /// Check that the configuration can be evaluated.
    ///
    /// # Errors
    /// `InvalidConfig` if a coefficient count is zero, or there are too
    /// few stations (3, or 4 when bins need a cubic spline).
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.n_ca == 0 || self.n_th == 0 {
            return Err(GeometryError::InvalidConfig(format!(
                "coefficient counts must be positive (n_ca={}, n_th={})",
                self.n_ca, self.n_th
            )));
        }
        let min_coords = if self.n_area_bins > 0 { 4 } else { 3 };
        if self.n_coords < min_coords {
            return Err(GeometryError::InvalidConfig(format!(
                "n_coords must be at least {}, got {}",
                min_coords, self.n_coords
            )));
        }
        Ok(())
    }
}
