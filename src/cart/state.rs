use serde::{Deserialize, Serialize};

use super::item::CartItem;
use crate::mvi::StoreState;

/// Ordered cart lines, unique by id.
///
/// Serializes as the bare JSON array of items, which is the persisted
/// format of the cart slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl StoreState for CartState {}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from arbitrary lines, restoring the cart invariants.
    ///
    /// Lines with quantity 0 are dropped and repeated ids are folded into
    /// their first occurrence. Returns whether anything had to change.
    pub fn from_items(items: Vec<CartItem>) -> (Self, bool) {
        let total = items.len();
        let mut normalized: Vec<CartItem> = Vec::with_capacity(total);

        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match normalized.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => normalized.push(item),
            }
        }

        let changed = normalized.len() != total;
        (Self { items: normalized }, changed)
    }

    pub(crate) fn from_normalized(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Quantity of the given product, 0 when it is not in the cart.
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.get(id).map_or(0, |item| item.quantity)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
