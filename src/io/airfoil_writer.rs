//! Writer for airfoil coordinate files.
//!
//! Output is Selig ordered (trailing edge → upper surface → leading edge
//! → lower surface → trailing edge), the layout panel-method solvers load.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cst::SurfaceCoordinates;

/// Format a coordinate set as an airfoil file.
///
/// The leading-edge station is written once.
pub fn format_airfoil(name: &str, coords: &SurfaceCoordinates) -> String {
    let (xs, ys) = coords.contour();
    let mut out = String::with_capacity(24 * (xs.len() + 1));
    out.push_str(name);
    out.push('\n');
    for (x, y) in xs.iter().zip(ys.iter()) {
        out.push_str(&format!("{:10.6} {:10.6}\n", x, y));
    }
    out
}

/// Write a coordinate set to an airfoil file.
pub fn write_airfoil_file(
    path: &Path,
    name: &str,
    coords: &SurfaceCoordinates,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let (xs, ys) = coords.contour();

    writeln!(writer, "{}", name)?;
    for (x, y) in xs.iter().zip(ys.iter()) {
        writeln!(writer, "{:10.6} {:10.6}", x, y)?;
    }
    writer.flush()
}
