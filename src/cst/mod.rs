//! Class/Shape-Transformation (CST) airfoil parameterization.
//!
//! This module provides:
//! - `CstCoefficients`: camber weights, thickness weights and trailing-edge thickness
//! - `SurfaceCoordinates`: upper/lower ordinates at shared chordwise stations
//! - `cst2coords`: coefficients → dense coordinates (forward transform)
//! - `coords2cst`: coordinates → coefficients by least squares (inverse transform)
//!
//! # Example
//!
//! ```
//! use cst_airfoil::cst::{cst2coords, coords2cst};
//!
//! let coords = cst2coords(&[0.05, 0.08, 0.04], &[0.17, 0.14, 0.16], 0.002).unwrap();
//! let fitted = coords2cst(coords.x(), coords.y_upper(), coords.y_lower(), 3, 3).unwrap();
//! assert!((fitted.t_te - 0.002).abs() < 1e-10);
//! ```

mod coefficients;
mod coordinates;
mod error;
mod transform;

pub use coefficients::CstCoefficients;
pub(crate) use coefficients::format_array;
pub use coordinates::SurfaceCoordinates;
pub use error::CstError;
pub use transform::{
    DEFAULT_N_COORDS, coords2cst, cst2coords, cst2coords_with, trailing_edge_thickness,
};
