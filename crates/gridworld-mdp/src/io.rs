use std::{fs, path::Path};

use crate::{GridWorldError, GridWorldMdp, GridWorldSpec};

/// Load a grid-world spec from YAML on disk.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<GridWorldSpec, GridWorldError> {
    let yaml = fs::read_to_string(path)?;
    let spec: GridWorldSpec = serde_yaml::from_str(&yaml)?;
    Ok(spec)
}

/// Load and build a grid world from a YAML file.
pub fn build_yaml(path: impl AsRef<Path>) -> Result<GridWorldMdp, GridWorldError> {
    let spec = load_yaml(path)?;
    spec.build()
}

/// Serialize and write a grid-world spec to YAML.
pub fn save_yaml(path: impl AsRef<Path>, spec: &GridWorldSpec) -> Result<(), GridWorldError> {
    let yaml = serde_yaml::to_string(spec)?;
    fs::write(path, yaml)?;
    Ok(())
}
