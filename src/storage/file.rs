//! Directory-backed key-value store.
//!
//! # Layout
//!
//! ```text
//! {dir}/
//! ├── cart_items.json       # current value of the "cart_items" slot
//! └── cart_items.json.tmp   # only present while a write is in flight
//! ```

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{validate_key, KeyValueStore, StorageError};

/// Stores each key as a `<key>.json` file inside one directory.
///
/// Writes go to a temp file first and are renamed into place, so readers
/// never observe a partially written slot.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json.tmp", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;

        match fs::read_to_string(self.slot_path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;

        let write_err = |source| StorageError::Write {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).await.map_err(write_err)?;

        let temp_path = self.temp_path(key);
        fs::write(&temp_path, value).await.map_err(write_err)?;
        fs::rename(&temp_path, self.slot_path(key))
            .await
            .map_err(write_err)?;

        tracing::trace!("Wrote slot '{}' under {}", key, self.dir.display());
        Ok(())
    }
}
