//! Shared test utilities and mock storage.

#![allow(dead_code, unused_imports)]

use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use cart_store::storage::{KeyValueStore, MemoryStore, StorageError};
use cart_store::ProductInfo;

/// Build a product with a predictable title and image.
pub fn product(id: &str, price: f64) -> ProductInfo {
    ProductInfo::new(
        id,
        format!("Product {}", id),
        format!("https://img.example/{}.png", id),
        price,
    )
}

/// Memory-backed store that can be told to fail reads or writes and counts
/// the writes it accepted.
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            inner: MemoryStore::with_entries(entries.iter().copied()),
            ..Self::default()
        }
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn shared(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Read {
                key: key.to_string(),
                source: io::Error::other("injected read failure"),
            });
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Write {
                key: key.to_string(),
                source: io::Error::other("injected write failure"),
            });
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }
}
