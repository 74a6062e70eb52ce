//! Marker trait for mutations dispatched to a store.

/// A requested change to a store's state.
///
/// Intents carry only the data the reducer needs; they never touch
/// storage or subscribers themselves.
pub trait Intent: Send + 'static {}
