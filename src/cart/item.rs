use serde::{Deserialize, Serialize};

use super::error::CartError;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    /// Unit price.
    pub price: f64,
    pub quantity: u32,
}

/// A product as offered to `add_to_cart`: a cart line without a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl ProductInfo {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Reject products that would break the cart's invariants.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.is_empty() {
            return Err(CartError::InvalidProduct {
                id: self.id.clone(),
                reason: "id must not be empty".to_string(),
            });
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::InvalidProduct {
                id: self.id.clone(),
                reason: format!("price must be a non-negative number, got {}", self.price),
            });
        }

        Ok(())
    }

    /// Turn the product into a cart line with the given quantity.
    pub fn into_item(self, quantity: u32) -> CartItem {
        CartItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity,
        }
    }
}

impl From<CartItem> for ProductInfo {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
        }
    }
}
