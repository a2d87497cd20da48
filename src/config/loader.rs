use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::resolve::resolve_config;
use super::types::{Config, ConfigFile};

/// Loads the config file at `path` and validates it into a [`Config`].
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed, or when a
/// setting is missing or out of range.
pub fn load_config(path: &Path) -> AppResult<Config> {
    let file = load_config_file(path)?;
    resolve_config(file)
}

/// Reads a raw config file; the format follows the file extension.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}

/// Creates the persistence directory, if one is configured.
///
/// # Errors
///
/// Returns an error when the directory cannot be created.
pub fn prepare_data_dir(config: &Config) -> AppResult<()> {
    let Some(dir) = config.data_dir.as_deref() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir).map_err(|err| {
        AppError::config(ConfigError::PrepareDataDir {
            path: dir.to_path_buf(),
            source: err,
        })
    })
}
