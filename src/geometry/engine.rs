//! Geometry evaluation of CST design points.

use super::{GeometryConfig, GeometryError, GeometryMetrics};
use crate::cst::{CstCoefficients, SurfaceCoordinates};

/// Evaluates geometric metrics of CST design points.
///
/// Stateless apart from its configuration: every call runs the forward
/// transform and recomputes the metrics, so one engine can be shared
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryEngine {
    config: GeometryConfig,
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self {
            config: GeometryConfig::default(),
        }
    }
}

impl GeometryEngine {
    /// Create an engine for a validated configuration.
    pub fn new(config: GeometryConfig) -> Result<Self, GeometryError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine configuration.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Evaluate the dense surface of a design point.
    ///
    /// This is the shape an external aerodynamic solver consumes.
    pub fn coordinates(
        &self,
        coeffs: &CstCoefficients,
    ) -> Result<SurfaceCoordinates, GeometryError> {
        coeffs.check_dimensions(self.config.n_ca, self.config.n_th)?;
        Ok(coeffs.to_coordinates_with(self.config.n_coords)?)
    }

    /// Evaluate the geometric metrics of a design point.
    ///
    /// # Errors
    /// - `Transform` for mismatched dimensions, invalid coefficients, or a
    ///   negative thickness anywhere on the chord
    /// - `Spline` if the bin integrals cannot be built
    pub fn evaluate(&self, coeffs: &CstCoefficients) -> Result<GeometryMetrics, GeometryError> {
        self.evaluate_with_coordinates(coeffs)
            .map(|(_, metrics)| metrics)
    }

    /// Evaluate metrics and keep the dense coordinates they were derived from.
    pub fn evaluate_with_coordinates(
        &self,
        coeffs: &CstCoefficients,
    ) -> Result<(SurfaceCoordinates, GeometryMetrics), GeometryError> {
        let coords = self.coordinates(coeffs)?;
        let metrics = GeometryMetrics::from_coordinates(&coords, self.config.n_area_bins)?;
        Ok((coords, metrics))
    }

    /// Evaluate a batch of design points, one result per point in order.
    ///
    /// A failing point does not affect the others.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate_batch(
        &self,
        points: &[CstCoefficients],
    ) -> Vec<Result<GeometryMetrics, GeometryError>> {
        points.iter().map(|c| self.evaluate(c)).collect()
    }

    /// Evaluate a batch of design points in parallel, one result per point
    /// in order.
    ///
    /// A failing point does not affect the others.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch(
        &self,
        points: &[CstCoefficients],
    ) -> Vec<Result<GeometryMetrics, GeometryError>> {
        use rayon::prelude::*;

        points.par_iter().map(|c| self.evaluate(c)).collect()
    }
}
