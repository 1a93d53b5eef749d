//! YAML configuration loading (§6.1, §11.2).

use std::path::Path;

use taskcal_core::Config;

use crate::error::IngestError;

/// Load a `Config` from a YAML file, falling back to every field's default
/// when the key is absent (the struct is `#[serde(default)]` end to end).
pub fn read_config_from_path(path: &Path) -> Result<Config, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_config_from_str(&content, &path.display().to_string())
}

pub fn read_config_from_str(content: &str, label: &str) -> Result<Config, IngestError> {
    serde_yaml::from_str(content).map_err(|source| IngestError::Config {
        path: label.to_string(),
        source,
    })
}
