use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CliError;

/// Defaults loaded from an optional `--config` TOML file. Every field is
/// optional; CLI flags always win when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
}

pub fn load(path: &Path) -> Result<FileConfig, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
