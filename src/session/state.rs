//! Session State Snapshot
//!
//! One value of [`SessionState`] describes everything a shopper session
//! owns at a point in time. Derived figures (totals, filtered list) are
//! recomputed on read, never stored.

use crate::cart::models::CartItem;
use crate::cart::ops;
use crate::catalog::filter::filter_products;
use crate::catalog::models::{Category, Product};

/// Snapshot of a single shopper session.
///
/// The detail view (`selected_product`) and the cart drawer (`cart_open`)
/// are independent toggles; both may be active at once, and nothing here
/// forbids it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Cart lines in insertion order, at most one per product id
    pub cart: Vec<CartItem>,

    /// Active category filter; `All` means unrestricted
    pub active_category: Category,

    /// Free-text search filter; empty means unrestricted
    pub search_query: String,

    /// Product id under detail view, if any
    pub selected_product: Option<String>,

    /// Whether the cart drawer is open
    pub cart_open: bool,

    /// Whether the mobile menu is open
    pub menu_open: bool,

    /// Most recent assistant suggestion (or fallback) text
    pub assistant_response: Option<String>,

    /// True while an assistant call is in flight
    pub assistant_pending: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            cart: Vec::new(),
            active_category: Category::All,
            search_query: String::new(),
            selected_product: None,
            cart_open: false,
            menu_open: false,
            assistant_response: None,
            assistant_pending: false,
        }
    }
}

impl SessionState {
    /// Sum of price × quantity across the cart.
    pub fn cart_total(&self) -> u64 {
        ops::cart_total(&self.cart)
    }

    /// Sum of quantities across the cart.
    pub fn cart_count(&self) -> u64 {
        ops::cart_count(&self.cart)
    }

    /// The catalog restricted by this session's active filters.
    pub fn filtered_products(&self, catalog: &[Product]) -> Vec<Product> {
        filter_products(catalog, self.active_category, &self.search_query)
    }
}
