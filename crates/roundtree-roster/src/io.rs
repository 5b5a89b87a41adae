use std::{fs, path::Path};

use crate::{Roster, RosterError, RosterSpec};

fn read_spec(path: &Path) -> Result<RosterSpec, RosterError> {
    let yaml = fs::read_to_string(path)?;
    let spec: RosterSpec = serde_yaml::from_str(&yaml)?;
    log::debug!(
        "read roster {}: {} players",
        path.display(),
        spec.players.len()
    );
    Ok(spec)
}

/// Load a roster spec from YAML on disk.
///
/// The spec is validated before it is returned, so a duplicate name or a
/// non-finite rating fails here rather than at compile time.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<RosterSpec, RosterError> {
    let spec = read_spec(path.as_ref())?;
    spec.validate()?;
    Ok(spec)
}

/// Load and compile a roster from a YAML file.
pub fn compile_yaml(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    read_spec(path.as_ref())?.compile()
}

/// Write a roster spec as YAML. Invalid specs are rejected and nothing is written.
pub fn save_yaml(path: impl AsRef<Path>, spec: &RosterSpec) -> Result<(), RosterError> {
    spec.validate()?;
    fs::write(path, serde_yaml::to_string(spec)?)?;
    Ok(())
}
