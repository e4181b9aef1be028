//! Fit-quality analysis for the inverse transform.
//!
//! # Example
//!
//! ```
//! use cst_airfoil::analysis::RoundTripMetrics;
//! use cst_airfoil::cst::cst2coords;
//!
//! let coords = cst2coords(&[0.1, 0.05], &[0.15, 0.12, 0.1], 0.0).unwrap();
//! let m = RoundTripMetrics::fit_and_compare(&coords, 2, 3).unwrap();
//! assert!(m.max_rms() < 1e-6);
//! ```

mod roundtrip;

pub use roundtrip::RoundTripMetrics;
