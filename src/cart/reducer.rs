use crate::cart::intent::CartIntent;
use crate::cart::item::CartItem;
use crate::cart::state::CartState;
use crate::mvi::Reducer;

/// Cart transitions. Every intent yields a freshly built item list; unknown
/// ids leave the cart as it was.
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::AddToCart { product } => {
                if state.contains(&product.id) {
                    bump(state, &product.id)
                } else {
                    let mut items = state.into_items();
                    items.push(product.into_item(1));
                    CartState::from_normalized(items)
                }
            }
            CartIntent::Increment { id } => bump(state, &id),
            CartIntent::Decrement { id } => {
                let items = state
                    .into_items()
                    .into_iter()
                    .filter_map(|item| {
                        if item.id != id {
                            return Some(item);
                        }
                        let quantity = item.quantity.saturating_sub(1);
                        (quantity > 0).then(|| CartItem { quantity, ..item })
                    })
                    .collect();
                CartState::from_normalized(items)
            }
            CartIntent::Remove { id } => {
                let items = state
                    .into_items()
                    .into_iter()
                    .filter(|item| item.id != id)
                    .collect();
                CartState::from_normalized(items)
            }
            CartIntent::Clear => CartState::default(),
        }
    }
}

fn bump(state: CartState, id: &str) -> CartState {
    let items = state
        .into_items()
        .into_iter()
        .map(|item| {
            if item.id == id {
                CartItem {
                    quantity: item.quantity.saturating_add(1),
                    ..item
                }
            } else {
                item
            }
        })
        .collect();
    CartState::from_normalized(items)
}
