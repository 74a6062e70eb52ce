use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cart::CART_ITEMS_KEY;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the cart snapshot is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend: "file" or "memory".
    #[serde(default)]
    pub backend: StorageBackend,
    /// Directory for the file backend (default: platform data dir).
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Slot holding the serialized cart (default: "cart_items").
    #[serde(default = "default_storage_key")]
    pub key: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_storage_key() -> String {
    CART_ITEMS_KEY.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: None,
            key: default_storage_key(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
