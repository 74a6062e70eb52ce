use thiserror::Error;

use crate::storage::StorageError;

/// Errors returned by [`CartStore`](super::CartStore) operations.
///
/// Operations on an unknown product id are not errors; they leave the cart
/// unchanged.
#[derive(Debug, Error)]
pub enum CartError {
    /// The store was read or mutated before `load()` completed.
    #[error("Cart store used before load(); call load() once at startup")]
    NotLoaded,

    #[error("Invalid product '{id}': {reason}")]
    InvalidProduct { id: String, reason: String },

    #[error("Stored cart under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
