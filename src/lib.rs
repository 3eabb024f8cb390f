//! ShopBase Storefront Core
//!
//! Session-scoped storefront logic for the ShopBase BD catalog widget:
//! catalog filtering, cart bookkeeping, view-selection state, and the
//! gateway to the generative shopping assistant.

// Domain modules
pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod session;

// Infrastructure
pub mod config;
pub mod router;
pub mod state;
