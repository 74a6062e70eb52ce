mod common;

use cart_store::cart::{CartIntent, CartReducer, CartState};
use cart_store::mvi::Reducer;
use common::product;

fn add(state: CartState, id: &str, price: f64) -> CartState {
    CartReducer::reduce(
        state,
        CartIntent::AddToCart {
            product: product(id, price),
        },
    )
}

fn inc(state: CartState, id: &str) -> CartState {
    CartReducer::reduce(state, CartIntent::Increment { id: id.to_string() })
}

fn dec(state: CartState, id: &str) -> CartState {
    CartReducer::reduce(state, CartIntent::Decrement { id: id.to_string() })
}

fn ids(state: &CartState) -> Vec<&str> {
    state.items().iter().map(|i| i.id.as_str()).collect()
}

// -- add_to_cart ---------------------------------------------------------------

#[test]
fn add_to_empty_cart_creates_single_line() {
    let state = add(CartState::new(), "p1", 10.0);
    assert_eq!(state.len(), 1);
    let item = &state.items()[0];
    assert_eq!(item.id, "p1");
    assert_eq!(item.quantity, 1);
    assert_eq!(item.price, 10.0);
    assert_eq!(item.title, "Product p1");
}

#[test]
fn add_existing_increments_quantity_only() {
    let state = add(add(CartState::new(), "p1", 10.0), "p2", 5.0);
    let before = state.get("p1").cloned().unwrap();

    let mut repeat = product("p1", 99.0);
    repeat.title = "Renamed".to_string();
    let state = CartReducer::reduce(state, CartIntent::AddToCart { product: repeat });

    let after = state.get("p1").unwrap();
    assert_eq!(after.quantity, 2);
    assert_eq!(after.title, before.title);
    assert_eq!(after.price, before.price);
    assert_eq!(after.image_url, before.image_url);
    assert_eq!(state.quantity_of("p2"), 1);
}

#[test]
fn add_new_appends_at_end() {
    let state = add(add(add(CartState::new(), "a", 1.0), "b", 1.0), "c", 1.0);
    assert_eq!(ids(&state), vec!["a", "b", "c"]);

    let state = add(state, "a", 1.0);
    assert_eq!(ids(&state), vec!["a", "b", "c"]);
}

// -- increment -----------------------------------------------------------------

#[test]
fn increment_existing_line() {
    let state = inc(add(CartState::new(), "p1", 1.0), "p1");
    assert_eq!(state.quantity_of("p1"), 2);
}

#[test]
fn increment_unknown_id_is_noop() {
    let state = add(CartState::new(), "p1", 1.0);
    let next = inc(state.clone(), "missing");
    assert_eq!(next, state);
}

// -- decrement -----------------------------------------------------------------

#[test]
fn decrement_reduces_quantity() {
    let state = inc(add(CartState::new(), "p1", 1.0), "p1");
    let state = dec(state, "p1");
    assert_eq!(state.quantity_of("p1"), 1);
}

#[test]
fn decrement_last_unit_removes_line() {
    let state = add(add(CartState::new(), "p1", 1.0), "p2", 1.0);
    let state = dec(state, "p1");
    assert!(!state.contains("p1"));
    assert_eq!(ids(&state), vec!["p2"]);
}

#[test]
fn decrement_unknown_id_is_noop() {
    let state = add(CartState::new(), "p1", 1.0);
    let next = dec(state.clone(), "missing");
    assert_eq!(next, state);
}

#[test]
fn decrement_empty_cart_stays_empty() {
    assert!(dec(CartState::new(), "p1").is_empty());
}

// -- remove / clear ------------------------------------------------------------

#[test]
fn remove_drops_line_regardless_of_quantity() {
    let state = inc(inc(add(CartState::new(), "p1", 1.0), "p1"), "p1");
    let state = add(state, "p2", 1.0);
    let state = CartReducer::reduce(
        state,
        CartIntent::Remove {
            id: "p1".to_string(),
        },
    );
    assert_eq!(ids(&state), vec!["p2"]);
}

#[test]
fn clear_empties_cart() {
    let state = add(add(CartState::new(), "p1", 1.0), "p2", 1.0);
    assert!(CartReducer::reduce(state, CartIntent::Clear).is_empty());
}

// -- full walk-through ---------------------------------------------------------

#[test]
fn add_add_dec_dec_round_trip() {
    let state = add(CartState::new(), "p1", 10.0);
    assert_eq!(state.quantity_of("p1"), 1);

    let state = add(state, "p1", 10.0);
    assert_eq!(state.len(), 1);
    assert_eq!(state.quantity_of("p1"), 2);

    let state = dec(state, "p1");
    assert_eq!(state.quantity_of("p1"), 1);

    let state = dec(state, "p1");
    assert!(state.is_empty());
}
