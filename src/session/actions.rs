//! Session Actions and Reducer
//!
//! All session mutations flow through [`reduce`]: one action in, one new
//! snapshot out. The previous snapshot is never mutated in place.

use super::state::SessionState;
use crate::cart::ops;
use crate::catalog::models::{Category, Product};

/// A single session mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add one unit of a product to the cart (aggregates by product id)
    AddToCart(Product),
    /// Drop the cart line for a product id
    RemoveFromCart(String),
    /// Adjust a cart line's quantity by `delta`, clamped to a minimum of 1
    UpdateQuantity { product_id: String, delta: i64 },
    /// Switch the active category filter
    SetCategory(Category),
    /// Replace the free-text search filter
    SetSearch(String),
    /// Open the detail view for a product id, or close it with `None`
    SelectProduct(Option<String>),
    /// Toggle the cart drawer
    SetCartOpen(bool),
    /// Toggle the mobile menu
    SetMenuOpen(bool),
    /// Return to the home view: category `All`, empty search, no selection
    GoHome,
    /// Mark an assistant call as in flight
    AssistantPending,
    /// Store the assistant's text and clear the in-flight flag
    AssistantResolved(String),
    /// Hide the assistant response panel
    DismissAssistant,
}

/// Applies `action` to `state`, returning the next snapshot.
pub fn reduce(state: &SessionState, action: Action) -> SessionState {
    let mut next = state.clone();

    match action {
        Action::AddToCart(product) => ops::add_to_cart(&mut next.cart, &product),
        Action::RemoveFromCart(product_id) => ops::remove_from_cart(&mut next.cart, &product_id),
        Action::UpdateQuantity { product_id, delta } => {
            ops::update_quantity(&mut next.cart, &product_id, delta)
        }
        Action::SetCategory(category) => next.active_category = category,
        Action::SetSearch(query) => next.search_query = query,
        Action::SelectProduct(product_id) => next.selected_product = product_id,
        Action::SetCartOpen(open) => next.cart_open = open,
        Action::SetMenuOpen(open) => next.menu_open = open,
        Action::GoHome => {
            next.active_category = Category::All;
            next.search_query.clear();
            next.selected_product = None;
        }
        Action::AssistantPending => next.assistant_pending = true,
        Action::AssistantResolved(text) => {
            next.assistant_response = Some(text);
            next.assistant_pending = false;
        }
        Action::DismissAssistant => next.assistant_response = None,
    }

    next
}
