// main.rs
//
// Driver: validate the named specs, build each part, and write STL + DXF
// into the export folder (first CLI argument, default "build").

use std::env;
use std::error::Error;
use std::path::PathBuf;

use braillecad::export::write_part;
use braillecad::{JigSpec, PulleySpec, Solid, assembly_jig, magnetic_pulley};
use tracing::info;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let out_dir: PathBuf = env::args().nth(1).unwrap_or_else(|| "build".into()).into();

    let mut parts: Vec<(&str, Solid)> = Vec::new();

    let jig = JigSpec::default();
    info!("jig data: {}", serde_json::to_string(&jig.validate()?)?);
    parts.push(("assembly_jig", assembly_jig(&jig)?));

    for (name, cells) in [("magnetic_pulley_3_cells", 3), ("magnetic_pulley_4_cells", 4)] {
        let spec = PulleySpec {
            cell_count_around_circumference: cells,
            ..PulleySpec::default()
        };
        info!("pulley data ({name}): {}", serde_json::to_string(&spec.validate()?)?);
        parts.push((name, magnetic_pulley(&spec)?));
    }

    for (name, part) in &parts {
        write_part(part, name, &out_dir)?;
        info!("wrote {name} to {}/", out_dir.display());
    }

    Ok(())
}
