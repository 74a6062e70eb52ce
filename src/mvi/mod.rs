//! Unidirectional state primitives shared by the stores in this crate.
//!
//! # Flow
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ persist ──→ subscribers
//!    ↑                                            │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: an immutable snapshot, replaced wholesale on every change
//! - **Intent**: a requested mutation
//! - **Reducer**: pure function producing the next snapshot

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
