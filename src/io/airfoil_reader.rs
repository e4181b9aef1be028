//! Reader for airfoil coordinate files.
//!
//! Parses plain `x y` point lists in Selig ordering: upper surface from
//! the trailing edge to the leading edge, then lower surface back to the
//! trailing edge.
//!
//! # File Format
//!
//! ```text
//! NACA 2412
//! 1.000000  0.001260
//! 0.500000  0.070000
//! 0.000000  0.000000
//! 0.500000 -0.040000
//! 1.000000 -0.001260
//! ```
//!
//! An optional title line may precede the points. Blank lines and lines
//! starting with `#` are ignored.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::cst::{CstError, SurfaceCoordinates};
use crate::operators::interp;

/// Stations closer than this are merged when the surfaces are resampled.
const MERGE_TOL: f64 = 1e-12;

/// Error type for airfoil file parsing.
#[derive(Debug, Error)]
pub enum AirfoilFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error with line number
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Not enough points to describe two surfaces
    #[error("Airfoil needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    /// Leading edge sits at either end of the point list
    #[error("No leading-edge point separating upper and lower surface")]
    MissingLeadingEdge,

    /// Resampled surfaces are not a valid coordinate set
    #[error(transparent)]
    Transform(#[from] CstError),
}

/// Airfoil point list as read from a file.
#[derive(Clone, Debug, PartialEq)]
pub struct AirfoilFile {
    /// Title line, if present
    pub name: Option<String>,
    /// Points `(x, y)` in Selig order
    pub points: Vec<(f64, f64)>,
}

impl AirfoilFile {
    /// Create from a point list.
    pub fn new(name: Option<String>, points: Vec<(f64, f64)>) -> Self {
        Self { name, points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the leading-edge point: the first point with `x <= 0`,
    /// otherwise the point of minimum `x`.
    pub fn leading_edge_index(&self) -> Option<usize> {
        self.points.iter().position(|&(x, _)| x <= 0.0).or_else(|| {
            self.points
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.0.total_cmp(&b.0))
                .map(|(i, _)| i)
        })
    }

    /// Split into upper and lower surfaces, both ordered leading edge to
    /// trailing edge. The leading-edge point belongs to both.
    pub fn split_surfaces(&self) -> Result<(Vec<(f64, f64)>, Vec<(f64, f64)>), AirfoilFileError> {
        if self.points.len() < 3 {
            return Err(AirfoilFileError::TooFewPoints {
                count: self.points.len(),
            });
        }
        let le = self
            .leading_edge_index()
            .ok_or(AirfoilFileError::MissingLeadingEdge)?;
        if le == 0 || le == self.points.len() - 1 {
            return Err(AirfoilFileError::MissingLeadingEdge);
        }

        let upper: Vec<(f64, f64)> = self.points[..=le].iter().rev().copied().collect();
        let lower: Vec<(f64, f64)> = self.points[le..].to_vec();
        Ok((upper, lower))
    }

    /// Resample both surfaces onto shared stations.
    ///
    /// The stations are the sorted union of both surfaces' `x` values;
    /// each surface is linearly interpolated onto them.
    ///
    /// # Errors
    /// - `TooFewPoints` / `MissingLeadingEdge` if the list cannot be split
    /// - `Transform` if the stations fall outside the unit chord
    pub fn to_surface_coordinates(&self) -> Result<SurfaceCoordinates, AirfoilFileError> {
        let (mut upper, mut lower) = self.split_surfaces()?;
        upper.sort_by(|a, b| a.0.total_cmp(&b.0));
        lower.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut x: Vec<f64> = upper.iter().chain(lower.iter()).map(|p| p.0).collect();
        x.sort_by(f64::total_cmp);
        x.dedup_by(|a, b| (*a - *b).abs() < MERGE_TOL);

        let (xu, yu): (Vec<f64>, Vec<f64>) = upper.into_iter().unzip();
        let (xl, yl): (Vec<f64>, Vec<f64>) = lower.into_iter().unzip();
        let y_u = interp(&x, &xu, &yu);
        let y_l = interp(&x, &xl, &yl);

        Ok(SurfaceCoordinates::new(x, y_u, y_l)?)
    }
}

/// Parse an airfoil point list from a string.
pub fn parse_airfoil(content: &str) -> Result<AirfoilFile, AirfoilFileError> {
    let mut name = None;
    let mut points = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match parse_point(line) {
            Some(p) => points.push(p),
            None if points.is_empty() && name.is_none() => {
                name = Some(line.to_string());
            }
            None => {
                return Err(AirfoilFileError::Parse {
                    line: line_num + 1,
                    message: "Expected: x y".into(),
                });
            }
        }
    }

    if points.len() < 3 {
        return Err(AirfoilFileError::TooFewPoints {
            count: points.len(),
        });
    }

    Ok(AirfoilFile { name, points })
}

fn parse_point(line: &str) -> Option<(f64, f64)> {
    let mut parts = line.split_whitespace();
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((x, y))
}

/// Read an airfoil coordinate file.
///
/// # Example
///
/// ```ignore
/// use cst_airfoil::io::read_airfoil_file;
/// use std::path::Path;
///
/// let airfoil = read_airfoil_file(Path::new("naca2412.dat"))?;
/// let coords = airfoil.to_surface_coordinates()?;
/// let fitted = coords.fit(6, 6)?;
/// println!("{}", fitted);
/// ```
pub fn read_airfoil_file(path: &Path) -> Result<AirfoilFile, AirfoilFileError> {
    let content = fs::read_to_string(path)?;
    parse_airfoil(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TOL: f64 = 1e-12;

    const DIAMOND: &str = "Diamond
1.0 0.0
0.5 0.05
0.0 0.0
0.5 -0.05
1.0 0.0
";

    #[test]
    fn test_parse_with_title() {
        let af = parse_airfoil(DIAMOND).unwrap();
        assert_eq!(af.name.as_deref(), Some("Diamond"));
        assert_eq!(af.len(), 5);
        assert_eq!(af.leading_edge_index(), Some(2));
    }

    #[test]
    fn test_parse_with_comments() {
        let content = "# generated\n\n1.0 0.0\n0.0 0.0\n# lower\n1.0 -0.01\n";
        let af = parse_airfoil(content).unwrap();
        assert_eq!(af.name, None);
        assert_eq!(af.len(), 3);
    }

    #[test]
    fn test_parse_error_line_number() {
        let content = "Title\n1.0 0.0\n0.5 abc\n0.0 0.0";
        match parse_airfoil(content) {
            Err(AirfoilFileError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_too_few_points() {
        let result = parse_airfoil("Title\n1.0 0.0\n0.0 0.0");
        assert!(matches!(
            result,
            Err(AirfoilFileError::TooFewPoints { count: 2 })
        ));
    }

    #[test]
    fn test_missing_leading_edge() {
        // Minimum x at the first point: only one surface
        let af = AirfoilFile::new(None, vec![(0.1, 0.0), (0.5, 0.05), (1.0, 0.0)]);
        assert!(matches!(
            af.to_surface_coordinates(),
            Err(AirfoilFileError::MissingLeadingEdge)
        ));
    }

    #[test]
    fn test_surface_coordinates_shared_stations() {
        let coords = parse_airfoil(DIAMOND)
            .unwrap()
            .to_surface_coordinates()
            .unwrap();

        assert_eq!(coords.x(), &[0.0, 0.5, 1.0]);
        assert!((coords.y_upper()[1] - 0.05).abs() < TOL);
        assert!((coords.y_lower()[1] + 0.05).abs() < TOL);
        assert!((coords.thickness()[1] - 0.1).abs() < TOL);
    }

    #[test]
    fn test_surface_coordinates_union_of_stations() {
        // Upper and lower surfaces sampled at different stations
        let af = AirfoilFile::new(
            None,
            vec![
                (1.0, 0.0),
                (0.4, 0.06),
                (0.0, 0.0),
                (0.6, -0.04),
                (1.0, 0.0),
            ],
        );
        let coords = af.to_surface_coordinates().unwrap();

        assert_eq!(coords.x(), &[0.0, 0.4, 0.6, 1.0]);
        // Upper at 0.6 interpolated between (0.4, 0.06) and (1.0, 0.0)
        assert!((coords.y_upper()[2] - 0.04).abs() < TOL);
        // Lower at 0.4 interpolated between (0.0, 0.0) and (0.6, -0.04)
        assert!((coords.y_lower()[1] + 0.04 * 0.4 / 0.6).abs() < TOL);
    }

    #[test]
    fn test_out_of_range_chord() {
        let af = AirfoilFile::new(None, vec![(2.0, 0.0), (0.0, 0.0), (2.0, 0.0)]);
        assert!(matches!(
            af.to_surface_coordinates(),
            Err(AirfoilFileError::Transform(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", DIAMOND).unwrap();

        let af = read_airfoil_file(file.path()).unwrap();
        assert_eq!(af.len(), 5);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_airfoil_file(Path::new("/nonexistent/airfoil.dat"));
        assert!(matches!(result, Err(AirfoilFileError::Io(_))));
    }
}
