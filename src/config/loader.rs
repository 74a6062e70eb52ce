use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::storage::validate_key;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Why a cart-store config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read cart config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cart config '{path}' is not valid TOML for [storage]/[logging]: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A field parsed but holds a value the cart cannot use.
    #[error("Config validation failed: {field} = '{value}' {reason}")]
    ValidationError {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl Config {
    /// Location of the cart config: `<config dir>/cart-store/config.toml`.
    ///
    /// The config dir comes from `dirs::config_dir()`; without one, the
    /// file is looked up relative to the working directory.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cart-store")
            .join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// `storage.key` must be usable as a slot (file) name and
    /// `logging.level` must be a tracing level.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if validate_key(&self.storage.key).is_err() {
            return Err(ConfigError::ValidationError {
                field: "storage.key",
                value: self.storage.key.clone(),
                reason: "must use only ASCII letters, digits, '_', '-' or '.' and not start with '.'"
                    .to_string(),
            });
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logging.level",
                value: self.logging.level.clone(),
                reason: format!("is not one of: {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }
}
