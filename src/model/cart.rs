use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One line of the cart: product display metadata captured at add time,
/// plus the quantity.
///
/// The metadata is a copy, not a reference back into the catalog; a later
/// catalog change does not retroactively edit a cart line. The serde
/// representation doubles as the persisted snapshot layout, so the field
/// set stays limited to what the cart needs (no rating, no description).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub image: Option<String>,
    pub price: f64,
    pub quantity: u32,
}

impl CartLineItem {
    /// Copies the display metadata out of a product, starting at quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}
