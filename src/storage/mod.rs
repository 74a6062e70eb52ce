//! Device-local key-value persistence.
//!
//! The cart only needs two operations from its storage collaborator: read a
//! string slot and overwrite it. [`KeyValueStore`] captures exactly that so
//! the store can run against an on-disk directory in the binary and an
//! in-memory map in tests.

mod file;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{StorageBackend, StorageConfig};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },
}

/// Asynchronous string key-value slot storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Absence is `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}

/// Check that `key` can be used as a storage slot name.
///
/// Keys double as file names for [`FileStore`], so they are restricted to
/// ASCII alphanumerics, `_`, `-` and `.`, and may not start with `.`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            key: key.to_string(),
        })
    }
}

/// Default directory for [`FileStore`] slots.
///
/// Uses `dirs::data_local_dir()/cart-store`, falling back to the current
/// directory when the platform has no data dir.
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("cart-store")
}

/// Build the backend selected by the storage config.
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        StorageBackend::File => {
            let dir = config.dir.clone().unwrap_or_else(default_data_dir);
            tracing::debug!("Using file storage at {}", dir.display());
            Arc::new(FileStore::new(dir))
        }
        StorageBackend::Memory => {
            tracing::debug!("Using in-memory storage");
            Arc::new(MemoryStore::new())
        }
    }
}
