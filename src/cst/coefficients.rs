//! CST coefficient vector.

use std::fmt;

use super::error::CstError;
use super::transform::{DEFAULT_N_COORDS, cst2coords_with};
use super::SurfaceCoordinates;

/// A CST design point: camber coefficients, thickness coefficients and
/// trailing-edge thickness.
///
/// The lengths `n_ca` and `n_th` define the dimensionality of the design
/// space and stay fixed for a given optimization problem.
#[derive(Clone, Debug, PartialEq)]
pub struct CstCoefficients {
    /// Camber-line Bernstein weights (length n_ca)
    pub a_ca: Vec<f64>,
    /// Thickness Bernstein weights (length n_th)
    pub a_th: Vec<f64>,
    /// Trailing-edge thickness (≥ 0)
    pub t_te: f64,
}

impl CstCoefficients {
    /// Create a coefficient vector. Not validated; see [`Self::validate`].
    pub fn new(a_ca: Vec<f64>, a_th: Vec<f64>, t_te: f64) -> Self {
        Self { a_ca, a_th, t_te }
    }

    /// Symmetric section: zero camber with the given thickness weights.
    pub fn symmetric(n_ca: usize, a_th: Vec<f64>, t_te: f64) -> Self {
        Self {
            a_ca: vec![0.0; n_ca],
            a_th,
            t_te,
        }
    }

    /// Number of camber coefficients.
    pub fn n_ca(&self) -> usize {
        self.a_ca.len()
    }

    /// Number of thickness coefficients.
    pub fn n_th(&self) -> usize {
        self.a_th.len()
    }

    /// Check the forward-transform preconditions.
    ///
    /// # Errors
    /// `InvalidInput` if a coefficient vector is empty, any value is not
    /// finite, or `t_te` is negative.
    pub fn validate(&self) -> Result<(), CstError> {
        if self.a_ca.is_empty() {
            return Err(CstError::invalid_input("camber coefficients are empty"));
        }
        if self.a_th.is_empty() {
            return Err(CstError::invalid_input("thickness coefficients are empty"));
        }
        if let Some(i) = self.a_ca.iter().position(|a| !a.is_finite()) {
            return Err(CstError::invalid_input(format!(
                "camber coefficient {} is not finite",
                i
            )));
        }
        if let Some(i) = self.a_th.iter().position(|a| !a.is_finite()) {
            return Err(CstError::invalid_input(format!(
                "thickness coefficient {} is not finite",
                i
            )));
        }
        if !self.t_te.is_finite() || self.t_te < 0.0 {
            return Err(CstError::invalid_input(format!(
                "trailing-edge thickness must be finite and non-negative, got {}",
                self.t_te
            )));
        }
        Ok(())
    }

    /// Check that the dimensionality matches a problem definition.
    pub fn check_dimensions(&self, n_ca: usize, n_th: usize) -> Result<(), CstError> {
        if self.n_ca() != n_ca || self.n_th() != n_th {
            return Err(CstError::invalid_input(format!(
                "expected {} camber and {} thickness coefficients, got {} and {}",
                n_ca,
                n_th,
                self.n_ca(),
                self.n_th()
            )));
        }
        Ok(())
    }

    /// Evaluate the surface at the default station count.
    pub fn to_coordinates(&self) -> Result<SurfaceCoordinates, CstError> {
        self.to_coordinates_with(DEFAULT_N_COORDS)
    }

    /// Evaluate the surface at `n_coords` cosine-spaced stations.
    pub fn to_coordinates_with(&self, n_coords: usize) -> Result<SurfaceCoordinates, CstError> {
        cst2coords_with(&self.a_ca, &self.a_th, self.t_te, n_coords)
    }

    /// Flatten into a single design vector `[a_ca..., a_th..., t_te]`.
    pub fn to_design_vector(&self) -> Vec<f64> {
        let mut v = Vec::with_capacity(self.n_ca() + self.n_th() + 1);
        v.extend_from_slice(&self.a_ca);
        v.extend_from_slice(&self.a_th);
        v.push(self.t_te);
        v
    }

    /// Split a flat design vector `[a_ca..., a_th..., t_te]`.
    pub fn from_design_vector(v: &[f64], n_ca: usize, n_th: usize) -> Result<Self, CstError> {
        if v.len() != n_ca + n_th + 1 {
            return Err(CstError::invalid_input(format!(
                "design vector length {} does not match n_ca + n_th + 1 = {}",
                v.len(),
                n_ca + n_th + 1
            )));
        }
        Ok(Self {
            a_ca: v[..n_ca].to_vec(),
            a_th: v[n_ca..n_ca + n_th].to_vec(),
            t_te: v[n_ca + n_th],
        })
    }
}

/// Format a slice as `[ 0.1234, -0.0100]`.
pub(crate) fn format_array(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{:7.4}", v)).collect();
    format!("[{}]", items.join(", "))
}

impl fmt::Display for CstCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "a_ca: {}", format_array(&self.a_ca))?;
        writeln!(f, "a_th: {}", format_array(&self.a_th))?;
        write!(f, "t_te: {:.4}", self.t_te)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_valid() {
        let c = CstCoefficients::new(vec![0.0; 3], vec![0.1; 3], 0.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_negative() {
        let empty = CstCoefficients::new(vec![], vec![0.1], 0.0);
        assert!(matches!(empty.validate(), Err(CstError::InvalidInput(_))));

        let neg_te = CstCoefficients::new(vec![0.0], vec![0.1], -0.01);
        assert!(matches!(neg_te.validate(), Err(CstError::InvalidInput(_))));

        let nan = CstCoefficients::new(vec![0.0], vec![f64::NAN], 0.0);
        assert!(matches!(nan.validate(), Err(CstError::InvalidInput(_))));
    }

    #[test]
    fn test_design_vector_layout() {
        let c = CstCoefficients::new(vec![0.1, 0.2], vec![0.3, 0.4, 0.5], 0.01);
        let v = c.to_design_vector();
        assert_eq!(v, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.01]);

        let back = CstCoefficients::from_design_vector(&v, 2, 3).unwrap();
        assert_eq!(back, c);
        assert!(CstCoefficients::from_design_vector(&v, 3, 3).is_err());
    }

    #[test]
    fn test_check_dimensions() {
        let c = CstCoefficients::symmetric(6, vec![0.1; 6], 0.0);
        assert!(c.check_dimensions(6, 6).is_ok());
        assert!(c.check_dimensions(6, 5).is_err());
    }

    #[test]
    fn test_display() {
        let c = CstCoefficients::new(vec![0.1, -0.05], vec![0.15], 0.0025);
        let s = c.to_string();
        assert!(s.contains("a_ca: [ 0.1000, -0.0500]"), "{}", s);
        assert!(s.contains("t_te: 0.0025"), "{}", s);
    }
}
