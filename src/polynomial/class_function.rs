//! CST class functions.
//!
//! The class function C(x) = x^N1 (1-x)^N2 fixes the basic family of a
//! shape before the Bernstein shape function scales it:
//! - N1 = 0.5, N2 = 1: round nose, sharp tail (airfoil thickness)
//! - N1 = 1, N2 = 1: vanishes linearly at both ends (camber line)

/// Class function exponents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassFunction {
    /// Leading-edge exponent N1
    pub n1: f64,
    /// Trailing-edge exponent N2
    pub n2: f64,
}

impl ClassFunction {
    /// Class function of the camber line.
    pub const CAMBER: Self = Self { n1: 1.0, n2: 1.0 };

    /// Class function of the thickness distribution (round leading edge).
    pub const THICKNESS: Self = Self { n1: 0.5, n2: 1.0 };

    /// Create a class function with arbitrary exponents.
    pub fn new(n1: f64, n2: f64) -> Self {
        Self { n1, n2 }
    }

    /// Evaluate C(x) = x^N1 (1-x)^N2.
    ///
    /// x is clamped to [0, 1] so fractional exponents never see a
    /// negative base from round-off.
    pub fn evaluate(&self, x: f64) -> f64 {
        class_function(x, self.n1, self.n2)
    }
}

/// Evaluate x^n1 (1-x)^n2 with x clamped to [0, 1].
pub fn class_function(x: f64, n1: f64, n2: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    x.powf(n1) * (1.0 - x).powf(n2)
}
