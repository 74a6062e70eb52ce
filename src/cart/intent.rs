use super::item::ProductInfo;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum CartIntent {
    /// Add one unit of the product, appending a new line if it is not in
    /// the cart yet.
    AddToCart { product: ProductInfo },
    Increment { id: String },
    /// Remove one unit; the line disappears when its quantity reaches 0.
    Decrement { id: String },
    /// Drop the line whatever its quantity.
    Remove { id: String },
    Clear,
}

impl Intent for CartIntent {}

impl CartIntent {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "add_to_cart",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
            Self::Remove { .. } => "remove",
            Self::Clear => "clear",
        }
    }
}
