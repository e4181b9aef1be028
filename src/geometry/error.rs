//! Error type for geometry evaluation.

use thiserror::Error;

use crate::cst::CstError;
use crate::operators::SplineError;

/// Errors that abort a single design-point evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Forward transform failed (invalid coefficients or shape)
    #[error(transparent)]
    Transform(#[from] CstError),

    /// Thickness spline for the bin integrals could not be built
    #[error("Thickness spline failed: {0}")]
    Spline(#[from] SplineError),

    /// Bin mean thickness is NaN or infinite
    #[error("Mean thickness of bin {bin} is not finite")]
    NonFiniteBin { bin: usize },

    /// Configuration out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GeometryError {
    /// True when the error marks the design point as infeasible.
    ///
    /// An optimizer should treat these as rejected candidates and keep
    /// going; the remaining variants point at a caller bug.
    pub fn is_infeasible_design(&self) -> bool {
        match self {
            Self::Transform(e) => e.is_infeasible_design(),
            Self::Spline(_) | Self::NonFiniteBin { .. } => true,
            Self::InvalidConfig(_) => false,
        }
    }
}
