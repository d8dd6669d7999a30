//! Optional `httpfs-bench.toml` / `httpfs-bench.json` defaults.
//!
//! A file named by `--config` must exist. Otherwise the working directory is
//! searched for the TOML file first, then the JSON one; finding neither is
//! not an error.
mod apply;
pub mod types;


use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use types::ConfigFile;

pub use apply::apply_config;

const TOML_CANDIDATE: &str = "httpfs-bench.toml";
const JSON_CANDIDATE: &str = "httpfs-bench.json";

/// Serialization format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Load the explicit config file, or the first default candidate present.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(explicit: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => [TOML_CANDIDATE, JSON_CANDIDATE]
            .into_iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists()),
    };
    chosen
        .map(|path| load_config_file(&path))
        .transpose()
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::of(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    format.parse(path, &content).map_err(AppError::from)
}
