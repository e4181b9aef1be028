//! Polynomial evaluation and station generation.
//!
//! This module provides:
//! - Bernstein polynomials and binomial coefficients
//! - CST class functions
//! - Cosine and uniform chordwise station distributions

mod bernstein;
mod class_function;
mod nodes;

pub use bernstein::{bernstein, bernstein_basis, bernstein_sum, binomial};
pub use class_function::{ClassFunction, class_function};
pub use nodes::{cosine_spacing, uniform_spacing};
