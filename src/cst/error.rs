//! Error types for the CST transform.

use thiserror::Error;

/// Errors raised by the forward and inverse CST transforms.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CstError {
    /// Malformed input (empty coefficients, length mismatch, NaN, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Coefficients produce a negative thickness (surfaces cross)
    #[error("Invalid shape: negative thickness {thickness:.3e} at station {station} (x = {x:.4})")]
    InvalidShape {
        station: usize,
        x: f64,
        thickness: f64,
    },

    /// Least-squares system is singular or underdetermined
    #[error(
        "Fit failure: {unknowns} coefficients requested but only {distinct_stations} distinct interior stations"
    )]
    FitFailure {
        unknowns: usize,
        distinct_stations: usize,
    },
}

impl CstError {
    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// True for errors that mark a design point as infeasible rather than
    /// a programming mistake in the caller.
    pub fn is_infeasible_design(&self) -> bool {
        matches!(self, Self::InvalidShape { .. } | Self::FitFailure { .. })
    }
}
