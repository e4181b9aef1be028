//! I/O utilities for airfoil coordinate files.
//!
//! This module provides:
//! - **Reading**: Selig-ordered point lists into [`AirfoilFile`], resampled
//!   onto shared stations for the inverse transform
//! - **Writing**: dense CST coordinates in the same layout, for external
//!   aerodynamic solvers
//!
//! # File Format
//!
//! ```text
//! NACA 2412
//! 1.000000  0.001260
//! ...
//! 0.000000  0.000000
//! ...
//! 1.000000 -0.001260
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cst_airfoil::io::{read_airfoil_file, write_airfoil_file};
//!
//! let coords = read_airfoil_file(Path::new("naca2412.dat"))?.to_surface_coordinates()?;
//! let fitted = coords.fit(6, 6)?;
//! write_airfoil_file(Path::new("naca2412_cst.dat"), "NACA 2412 (CST)", &fitted.to_coordinates()?)?;
//! ```

mod airfoil_reader;
mod airfoil_writer;

pub use airfoil_reader::{AirfoilFile, AirfoilFileError, parse_airfoil, read_airfoil_file};
pub use airfoil_writer::{format_airfoil, write_airfoil_file};
