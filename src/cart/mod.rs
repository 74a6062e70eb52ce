//! Shopping cart state.
//!
//! [`CartStore`] owns the ordered list of cart lines, mirrors every change
//! into a [`KeyValueStore`](crate::storage::KeyValueStore) slot and
//! publishes the new snapshot to subscribers. The transitions themselves
//! live in [`CartReducer`], which is pure and can be tested without any
//! storage at all.

mod error;
mod intent;
mod item;
mod reducer;
mod state;
mod store;

pub use error::CartError;
pub use intent::CartIntent;
pub use item::{CartItem, ProductInfo};
pub use reducer::CartReducer;
pub use state::CartState;
pub use store::CartStore;

/// Storage slot holding the serialized cart.
pub const CART_ITEMS_KEY: &str = "cart_items";
