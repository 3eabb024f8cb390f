//! Shopping Cart Domain Models

use crate::catalog::models::Product;
use serde::{Deserialize, Serialize};

/// Returns the default quantity (1) for cart items
fn default_quantity() -> u32 {
    1
}

/// Represents an item in the shopping cart: a product snapshot plus how many
/// units the shopper selected.
///
/// The cart holds at most one `CartItem` per product id; repeated adds
/// aggregate into `quantity` instead of inserting duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product this line refers to, flattened onto the wire the way the
    /// widget expects (item fields alongside product fields)
    #[serde(flatten)]
    pub product: Product,

    /// Quantity of this item, always >= 1 (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> u64 {
        u64::from(self.product.price) * u64::from(self.quantity)
    }
}
