//! Shopping Cart Domain Module
//!
//! This module contains the cart business logic:
//! - Domain models (CartItem)
//! - Pure cart operations (add, remove, quantity adjust, derived totals)

pub mod models;
pub mod ops;

// Re-export commonly used types for convenience
pub use models::CartItem;
pub use ops::{add_to_cart, cart_count, cart_total, remove_from_cart, update_quantity};
