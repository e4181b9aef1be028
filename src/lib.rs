//! # cst-airfoil
//!
//! Class/Shape-Transformation (CST) airfoil parameterization and geometry
//! metrics for shape optimization.
//!
//! This crate provides the core building blocks:
//! - Bernstein polynomials, class functions and cosine stations
//! - The forward transform (coefficients → surface coordinates)
//! - The inverse transform (least-squares fit of coordinates)
//! - Geometric metrics (t/c, area, leading-edge radius, bin areas)
//! - Normalized constraints and design-variable bounds
//! - Airfoil coordinate file I/O and round-trip fit analysis
//!
//! # Example
//!
//! ```
//! use cst_airfoil::{CstCoefficients, GeometryConfig, GeometryEngine};
//!
//! let engine = GeometryEngine::new(GeometryConfig::default()).unwrap();
//! let coeffs = CstCoefficients::new(vec![0.05; 6], vec![0.15; 6], 0.0);
//! let metrics = engine.evaluate(&coeffs).unwrap();
//! assert!(metrics.t_c > 0.0);
//! ```

pub mod analysis;
pub mod basis;
pub mod cst;
pub mod geometry;
pub mod io;
pub mod operators;
pub mod polynomial;

// Re-export main types for convenience
pub use analysis::RoundTripMetrics;
pub use cst::{
    CstCoefficients, CstError, DEFAULT_N_COORDS, SurfaceCoordinates, coords2cst, cst2coords,
    cst2coords_with,
};
pub use geometry::{
    ConstraintLimits, ConstraintValues, DesignBounds, GeometryConfig, GeometryEngine,
    GeometryError, GeometryMetrics,
};
pub use io::{AirfoilFile, AirfoilFileError, read_airfoil_file, write_airfoil_file};
