//! Reducer trait.

use super::intent::Intent;
use super::state::StoreState;

/// Computes the next state for an intent.
///
/// The reducer is the only place where state transitions happen. It takes
/// the previous snapshot by value and returns a fresh one: no I/O, no
/// shared mutation.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
