//! Writing finished parts to disk.
//!
//! Export is the terminal, side-effecting step. Each part is serialized to
//! binary STL (for printing) and to DXF (for CAD interchange). A
//! non-manifold result is reported as a warning and both files are still
//! written: it flags parameters worth revisiting, not a failed build.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::Solid;
use crate::errors::ExportError;

/// Write `part` as `<dir>/<name>.stl` and `<dir>/<name>.dxf`, creating the
/// directory if needed.
pub fn write_part(part: &Solid, name: &str, dir: &Path) -> Result<(), ExportError> {
    if !part.is_manifold() {
        warn!("part \"{name}\" is not manifold");
    }

    fs::create_dir_all(dir)?;

    let stl = part.to_stl_binary(name)?;
    fs::write(dir.join(name).with_extension("stl"), stl)?;

    let dxf = part.to_dxf().map_err(|e| ExportError::Dxf(e.to_string()))?;
    fs::write(dir.join(name).with_extension("dxf"), dxf)?;

    Ok(())
}
