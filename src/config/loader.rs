//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding `storage.data_file`.
pub const DATA_FILE_ENV: &str = "RECIPES_DATA_FILE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value {value:?} for {name}")]
    InvalidOverride { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line. They win over the file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub data_file: Option<PathBuf>,
}

/// Read and parse a TOML configuration file. Does not validate.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Apply `PORT` and `RECIPES_DATA_FILE` using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(PORT_ENV).filter(|v| !v.is_empty()) {
        config.listener.port = value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
            name: PORT_ENV,
            value: value.clone(),
        })?;
    }

    if let Some(value) = lookup(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
        config.storage.data_file = PathBuf::from(value);
    }

    Ok(())
}

/// Build the effective configuration: defaults, then `path` if given, then
/// the environment, then `overrides`. The result is validated.
pub fn resolve_config<F>(
    path: Option<&Path>,
    lookup: F,
    overrides: &ConfigOverrides,
) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;

    if let Some(port) = overrides.port {
        config.listener.port = port;
    }
    if let Some(data_file) = &overrides.data_file {
        config.storage.data_file = data_file.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
