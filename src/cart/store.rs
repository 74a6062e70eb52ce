//! Persistent, observable cart store.
//!
//! Mutations are serialized: the store holds an async mutex across
//! reduce → persist → publish, so a second call issued while the first is
//! still writing waits for it instead of racing. The new snapshot is only
//! committed in memory once the write succeeded, which keeps the persisted
//! slot and the published state equal after every completed operation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};

use super::error::CartError;
use super::intent::CartIntent;
use super::item::{CartItem, ProductInfo};
use super::reducer::CartReducer;
use super::state::CartState;
use super::CART_ITEMS_KEY;
use crate::mvi::Reducer;
use crate::storage::KeyValueStore;

/// Shared handle to the cart.
///
/// Cheap to clone; all clones see the same state and subscribers.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    state: watch::Sender<CartState>,
    loaded: AtomicBool,
    /// Held for the whole of a load or mutation.
    mutation: Mutex<()>,
}

impl CartStore {
    /// Create a store persisting under the `"cart_items"` slot.
    ///
    /// The store is unusable until [`load`](Self::load) has completed.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, CART_ITEMS_KEY)
    }

    /// Create a store persisting under a custom slot.
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let (state, _) = watch::channel(CartState::default());
        Self {
            inner: Arc::new(CartStoreInner {
                storage,
                key: key.into(),
                state,
                loaded: AtomicBool::new(false),
                mutation: Mutex::new(()),
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.loaded.load(Ordering::Acquire)
    }

    /// Read the persisted cart into memory.
    ///
    /// An absent slot is an empty cart. A snapshot that violates the cart
    /// invariants (zero quantities, repeated ids) is repaired and logged.
    /// Calling `load` again re-reads the slot.
    pub async fn load(&self) -> Result<CartState, CartError> {
        let _guard = self.inner.mutation.lock().await;
        let key = &self.inner.key;

        let state = match self.inner.storage.get(key).await? {
            Some(raw) => {
                let items: Vec<CartItem> =
                    serde_json::from_str(&raw).map_err(|e| CartError::Corrupt {
                        key: key.clone(),
                        source: e,
                    })?;
                let (state, repaired) = CartState::from_items(items);
                if repaired {
                    tracing::warn!(
                        "Repaired stored cart under '{}': {} line(s) kept",
                        key,
                        state.len()
                    );
                }
                state
            }
            None => CartState::default(),
        };

        tracing::info!(
            "Loaded cart from '{}': {} line(s), {} unit(s)",
            key,
            state.len(),
            state.total_quantity()
        );

        self.publish(state.clone());
        self.inner.loaded.store(true, Ordering::Release);
        Ok(state)
    }

    /// Current cart snapshot.
    pub fn snapshot(&self) -> Result<CartState, CartError> {
        self.ensure_loaded()?;
        Ok(self.inner.state.borrow().clone())
    }

    /// Subscribe to cart changes.
    ///
    /// The receiver starts at the current snapshot and is woken whenever a
    /// mutation changes the cart; no-op mutations do not wake it.
    pub fn subscribe(&self) -> Result<watch::Receiver<CartState>, CartError> {
        self.ensure_loaded()?;
        Ok(self.inner.state.subscribe())
    }

    /// Add one unit of `product`.
    pub async fn add_to_cart(&self, product: ProductInfo) -> Result<CartState, CartError> {
        self.dispatch(CartIntent::AddToCart { product }).await
    }

    pub async fn increment(&self, id: &str) -> Result<CartState, CartError> {
        self.dispatch(CartIntent::Increment { id: id.to_string() }).await
    }

    pub async fn decrement(&self, id: &str) -> Result<CartState, CartError> {
        self.dispatch(CartIntent::Decrement { id: id.to_string() }).await
    }

    pub async fn remove(&self, id: &str) -> Result<CartState, CartError> {
        self.dispatch(CartIntent::Remove { id: id.to_string() }).await
    }

    pub async fn clear(&self) -> Result<CartState, CartError> {
        self.dispatch(CartIntent::Clear).await
    }

    /// Apply an intent: reduce, persist, then publish.
    ///
    /// Products entering the cart are validated first, so a price the slot
    /// cannot round-trip never reaches storage. If the write fails the
    /// in-memory cart is left untouched and the storage error is returned
    /// as-is.
    pub async fn dispatch(&self, intent: CartIntent) -> Result<CartState, CartError> {
        let _guard = self.inner.mutation.lock().await;
        self.ensure_loaded()?;

        if let CartIntent::AddToCart { product } = &intent {
            product.validate()?;
        }

        let name = intent.name();
        let current = self.inner.state.borrow().clone();
        let next = CartReducer::reduce(current, intent);

        self.persist(&next).await?;

        let changed = self.publish(next.clone());
        tracing::debug!(
            "Cart {}: {} line(s), {} unit(s){}",
            name,
            next.len(),
            next.total_quantity(),
            if changed { "" } else { " (unchanged)" }
        );
        Ok(next)
    }

    fn ensure_loaded(&self) -> Result<(), CartError> {
        if self.is_loaded() {
            Ok(())
        } else {
            Err(CartError::NotLoaded)
        }
    }

    async fn persist(&self, state: &CartState) -> Result<(), CartError> {
        let raw = serde_json::to_string(state).map_err(CartError::Serialize)?;
        self.inner.storage.set(&self.inner.key, raw).await?;
        Ok(())
    }

    /// Replace the published snapshot, notifying subscribers only on change.
    fn publish(&self, next: CartState) -> bool {
        self.inner.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        })
    }
}
