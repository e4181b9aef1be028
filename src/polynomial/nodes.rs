//! Chordwise station distributions.
//!
//! Airfoil surfaces change fastest near the leading edge (square-root
//! nose) and the trailing edge, so stations are clustered at both ends
//! with cosine spacing:
//! x_i = (1 - cos(π i / (n-1))) / 2,  i = 0, ..., n-1
//!
//! The spacing near x = 0 scales like 1/n², which keeps the nose
//! curvature resolvable by finite differences.

use std::f64::consts::PI;

/// Cosine-spaced stations on [0, 1], endpoints included.
///
/// Returns `[0.0]` for n = 1 and an empty vector for n = 0.
pub fn cosine_spacing(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut x: Vec<f64> = (0..n)
                .map(|i| 0.5 * (1.0 - (PI * i as f64 / (n - 1) as f64).cos()))
                .collect();
            // Endpoints are exact
            x[0] = 0.0;
            x[n - 1] = 1.0;
            x
        }
    }
}

/// Uniformly spaced stations on [0, 1], endpoints included.
pub fn uniform_spacing(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}
