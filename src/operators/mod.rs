//! Numerical operators on sampled one-dimensional data.
//!
//! This module provides:
//! - Finite-difference derivatives (`gradient`)
//! - Trapezoidal quadrature (`trapezoid`)
//! - Piecewise-linear interpolation (`interp`)
//! - Not-a-knot cubic splines with exact integrals (`CubicSpline`)
//!
//! All operators are free functions or plain values without shared state.

mod differentiation;
mod interpolation;
mod quadrature;
mod spline;

pub use differentiation::{gradient, gradient_with_spacing};
pub use interpolation::{interp, interp_at};
pub use quadrature::{cumulative_trapezoid, trapezoid};
pub use spline::{CubicSpline, SplineError};
