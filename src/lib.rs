//! Persistent shopping cart state.
//!
//! - [`cart`]: cart items, the pure reducer and the observable [`CartStore`]
//! - [`storage`]: the key-value slot the cart is mirrored into
//! - [`config`]: TOML configuration
//! - [`mvi`]: intent/reducer/state traits the cart is built on

pub mod cart;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod storage;

pub use cart::{CartError, CartIntent, CartItem, CartState, CartStore, ProductInfo};
