//! Marker trait for store snapshots.

/// A complete, immutable store snapshot.
///
/// `Clone` hands copies to subscribers, `PartialEq` lets the store skip
/// notifications for no-op intents, `Default` is the state before load.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
