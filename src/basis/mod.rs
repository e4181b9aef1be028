//! Shape basis representations.
//!
//! This module provides the CST design matrix that maps shape
//! coefficients to sampled ordinates and back (least squares).

mod shape_matrix;

pub use shape_matrix::ShapeMatrix;
