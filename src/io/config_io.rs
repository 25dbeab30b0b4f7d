use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::WorkspaceConfig;

/// File name looked up in the workspace directory
pub const CONFIG_FILE: &str = "opsdeck.toml";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read `opsdeck.toml` from `dir`. A missing file is not an error and
/// yields `None`; the file is never written.
pub fn load_config(dir: &Path) -> Result<Option<WorkspaceConfig>, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no {} in {}", CONFIG_FILE, dir.display());
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::ReadError { path, source }),
    };
    let config = toml::from_str(&text).map_err(|source| ConfigError::ParseError {
        path: path.clone(),
        source,
    })?;
    log::info!("loaded configuration from {}", path.display());
    Ok(Some(config))
}
