//! Normalized geometric constraints and design-variable bounds.
//!
//! Every enabled limit becomes an inequality `g = 1 - value / limit`
//! that is satisfied when `g <= 0`.
//!
//! # Example
//!
//! ```
//! use cst_airfoil::geometry::{ConstraintLimits, GeometryMetrics};
//!
//! let metrics = GeometryMetrics {
//!     t_c: 0.12,
//!     a_cs: 0.08,
//!     r_le: 0.01,
//!     a_bins: vec![0.05, 0.1, 0.08],
//! };
//! let limits = ConstraintLimits::none().with_t_c_min(0.1).with_a_bins_min(0.02);
//! let g = limits.evaluate(&metrics);
//! assert!(g.is_feasible());
//! ```

use super::{GeometryConfig, GeometryMetrics};
use crate::cst::CstCoefficients;

/// Lower limits on the geometric metrics. `None` disables a constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintLimits {
    /// Minimum thickness-to-chord ratio
    pub t_c_min: Option<f64>,
    /// Minimum leading-edge radius
    pub r_le_min: Option<f64>,
    /// Minimum cross-sectional area
    pub a_cs_min: Option<f64>,
    /// Minimum mean thickness in every bin
    pub a_bins_min: Option<f64>,
}

impl Default for ConstraintLimits {
    /// - t_c_min: 0.1
    /// - r_le_min: 0.05
    /// - a_cs_min: 0.1
    /// - a_bins_min: 0.02
    fn default() -> Self {
        Self {
            t_c_min: Some(0.1),
            r_le_min: Some(0.05),
            a_cs_min: Some(0.1),
            a_bins_min: Some(0.02),
        }
    }
}

impl ConstraintLimits {
    /// No constraints enabled.
    pub fn none() -> Self {
        Self {
            t_c_min: None,
            r_le_min: None,
            a_cs_min: None,
            a_bins_min: None,
        }
    }

    /// Set minimum thickness-to-chord ratio.
    pub fn with_t_c_min(mut self, limit: f64) -> Self {
        self.t_c_min = Some(limit);
        self
    }

    /// Set minimum leading-edge radius.
    pub fn with_r_le_min(mut self, limit: f64) -> Self {
        self.r_le_min = Some(limit);
        self
    }

    /// Set minimum cross-sectional area.
    pub fn with_a_cs_min(mut self, limit: f64) -> Self {
        self.a_cs_min = Some(limit);
        self
    }

    /// Set minimum bin mean thickness.
    pub fn with_a_bins_min(mut self, limit: f64) -> Self {
        self.a_bins_min = Some(limit);
        self
    }

    /// Evaluate the normalized constraints for a set of metrics.
    ///
    /// `g4` holds one entry per bin, or nothing when the bin limit is
    /// disabled.
    pub fn evaluate(&self, metrics: &GeometryMetrics) -> ConstraintValues {
        ConstraintValues {
            g1: self.t_c_min.map(|lim| normalized(metrics.t_c, lim)),
            g2: self.r_le_min.map(|lim| normalized(metrics.r_le, lim)),
            g3: self.a_cs_min.map(|lim| normalized(metrics.a_cs, lim)),
            g4: self
                .a_bins_min
                .map(|lim| metrics.a_bins.iter().map(|&a| normalized(a, lim)).collect())
                .unwrap_or_default(),
        }
    }
}

fn normalized(value: f64, limit: f64) -> f64 {
    1.0 - value / limit
}

/// Normalized constraint values, feasible when every entry is `<= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintValues {
    /// Thickness-to-chord ratio
    pub g1: Option<f64>,
    /// Leading-edge radius
    pub g2: Option<f64>,
    /// Cross-sectional area
    pub g3: Option<f64>,
    /// Per-bin mean thickness
    pub g4: Vec<f64>,
}

impl ConstraintValues {
    fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        [self.g1, self.g2, self.g3]
            .into_iter()
            .flatten()
            .chain(self.g4.iter().copied())
    }

    /// True if every enabled constraint is satisfied.
    ///
    /// NaN values count as violated.
    pub fn is_feasible(&self) -> bool {
        self.iter().all(|g| g <= 0.0)
    }

    /// Largest positive constraint value, 0 when feasible.
    pub fn max_violation(&self) -> f64 {
        self.iter()
            .map(|g| if g.is_nan() { f64::INFINITY } else { g })
            .fold(0.0, f64::max)
    }

    /// Number of scalar constraints.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True if no constraint is enabled.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Box bounds on the design variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignBounds {
    /// Camber coefficient range
    pub a_ca: (f64, f64),
    /// Thickness coefficient range
    pub a_th: (f64, f64),
    /// Lower trailing-edge thickness
    pub t_te_min: f64,
    /// Upper trailing-edge thickness when it is free
    pub t_te_max: f64,
    /// Hold the trailing-edge thickness at `t_te_min`
    pub fix_te: bool,
}

impl Default for DesignBounds {
    /// - a_ca: [-0.25, 0.25]
    /// - a_th: [0.01, 0.20]
    /// - t_te: fixed at 0
    fn default() -> Self {
        Self {
            a_ca: (-0.25, 0.25),
            a_th: (0.01, 0.20),
            t_te_min: 0.0,
            t_te_max: 0.1,
            fix_te: true,
        }
    }
}

impl DesignBounds {
    /// Bounds with a free trailing-edge thickness in `[t_te_min, 0.1]`.
    pub fn free_te(t_te_min: f64) -> Self {
        Self {
            t_te_min,
            fix_te: false,
            ..Self::default()
        }
    }

    fn t_te_range(&self) -> (f64, f64) {
        if self.fix_te {
            (self.t_te_min, self.t_te_min)
        } else {
            (self.t_te_min, self.t_te_max)
        }
    }

    fn design_vector(&self, config: &GeometryConfig, pick: fn((f64, f64)) -> f64) -> Vec<f64> {
        let mut v = Vec::with_capacity(config.n_design_variables());
        v.extend(std::iter::repeat_n(pick(self.a_ca), config.n_ca));
        v.extend(std::iter::repeat_n(pick(self.a_th), config.n_th));
        v.push(pick(self.t_te_range()));
        v
    }

    /// Lower bounds as a flat design vector `[a_ca..., a_th..., t_te]`.
    pub fn lower(&self, config: &GeometryConfig) -> Vec<f64> {
        self.design_vector(config, |(lo, _)| lo)
    }

    /// Upper bounds as a flat design vector `[a_ca..., a_th..., t_te]`.
    pub fn upper(&self, config: &GeometryConfig) -> Vec<f64> {
        self.design_vector(config, |(_, hi)| hi)
    }

    /// True if every coefficient lies within its bounds.
    pub fn contains(&self, coeffs: &CstCoefficients) -> bool {
        let within = |v: f64, (lo, hi): (f64, f64)| v >= lo && v <= hi;
        coeffs.a_ca.iter().all(|&a| within(a, self.a_ca))
            && coeffs.a_th.iter().all(|&a| within(a, self.a_th))
            && within(coeffs.t_te, self.t_te_range())
    }

    /// Project coefficients onto the bounds.
    pub fn clamp(&self, coeffs: &CstCoefficients) -> CstCoefficients {
        let clamp = |v: f64, (lo, hi): (f64, f64)| v.clamp(lo, hi);
        CstCoefficients::new(
            coeffs.a_ca.iter().map(|&a| clamp(a, self.a_ca)).collect(),
            coeffs.a_th.iter().map(|&a| clamp(a, self.a_th)).collect(),
            clamp(coeffs.t_te, self.t_te_range()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn metrics() -> GeometryMetrics {
        GeometryMetrics {
            t_c: 0.12,
            a_cs: 0.08,
            r_le: 0.01,
            a_bins: vec![0.01, 0.04],
        }
    }

    #[test]
    fn test_default_limits() {
        let g = ConstraintLimits::default().evaluate(&metrics());

        assert!((g.g1.unwrap() - (1.0 - 0.12 / 0.1)).abs() < TOL);
        assert!((g.g2.unwrap() - 0.8).abs() < TOL);
        assert!((g.g3.unwrap() - 0.2).abs() < TOL);
        assert_eq!(g.g4.len(), 2);
        assert!((g.g4[0] - 0.5).abs() < TOL);
        assert!((g.g4[1] + 1.0).abs() < TOL);

        assert!(!g.is_feasible());
        assert!((g.max_violation() - 0.8).abs() < TOL);
        assert_eq!(g.len(), 5);
    }

    #[test]
    fn test_disabled_limits() {
        let g = ConstraintLimits::none().evaluate(&metrics());
        assert!(g.is_empty());
        assert!(g.is_feasible());
        assert_eq!(g.max_violation(), 0.0);

        let g = ConstraintLimits::none().with_a_cs_min(0.05).evaluate(&metrics());
        assert_eq!(g.len(), 1);
        assert!(g.is_feasible());
    }

    #[test]
    fn test_nan_is_infeasible() {
        let g = ConstraintValues {
            g1: Some(f64::NAN),
            g2: None,
            g3: None,
            g4: vec![],
        };
        assert!(!g.is_feasible());
        assert!(g.max_violation().is_infinite());
    }

    #[test]
    fn test_bounds_vectors() {
        let config = GeometryConfig::new(2, 3);
        let bounds = DesignBounds::default();
        assert_eq!(bounds.lower(&config), vec![-0.25, -0.25, 0.01, 0.01, 0.01, 0.0]);
        assert_eq!(bounds.upper(&config), vec![0.25, 0.25, 0.2, 0.2, 0.2, 0.0]);

        let free = DesignBounds::free_te(0.001);
        assert_eq!(free.lower(&config)[5], 0.001);
        assert_eq!(free.upper(&config)[5], 0.1);
    }

    #[test]
    fn test_bounds_contains_and_clamp() {
        let bounds = DesignBounds::free_te(0.0);
        let inside = CstCoefficients::new(vec![0.1, -0.1], vec![0.1, 0.15], 0.01);
        assert!(bounds.contains(&inside));
        assert_eq!(bounds.clamp(&inside), inside);

        let outside = CstCoefficients::new(vec![0.5, -0.1], vec![0.0, 0.15], 0.2);
        assert!(!bounds.contains(&outside));
        let clamped = bounds.clamp(&outside);
        assert!(bounds.contains(&clamped));
        assert_eq!(clamped.a_ca, vec![0.25, -0.1]);
        assert_eq!(clamped.a_th, vec![0.01, 0.15]);
        assert_eq!(clamped.t_te, 0.1);

        // Fixed trailing edge only admits t_te_min
        assert!(!DesignBounds::default().contains(&inside));
    }
}
