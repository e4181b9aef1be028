//! Geometric metrics of CST design points.
//!
//! [`GeometryEngine`] turns a coefficient set into the quantities an
//! optimizer constrains: thickness-to-chord ratio, cross-sectional area,
//! leading-edge radius and per-bin mean thickness. [`ConstraintLimits`]
//! normalizes them into `g <= 0` inequalities.
//!
//! # Example
//!
//! ```
//! use cst_airfoil::cst::CstCoefficients;
//! use cst_airfoil::geometry::{ConstraintLimits, GeometryConfig, GeometryEngine};
//!
//! let engine = GeometryEngine::new(GeometryConfig::new(3, 3)).unwrap();
//! let coeffs = CstCoefficients::new(vec![0.05; 3], vec![0.15; 3], 0.0);
//!
//! let metrics = engine.evaluate(&coeffs).unwrap();
//! let g = ConstraintLimits::default().evaluate(&metrics);
//! println!("{}\nfeasible: {}", metrics, g.is_feasible());
//! ```

mod config;
mod constraints;
mod curvature;
mod engine;
mod error;
mod metrics;

pub use config::GeometryConfig;
pub use constraints::{ConstraintLimits, ConstraintValues, DesignBounds};
pub use curvature::{contour_curvature, leading_edge_radius};
pub use engine::GeometryEngine;
pub use error::GeometryError;
pub use metrics::{GeometryMetrics, area_bins, cross_sectional_area, thickness_ratio};
