//! Storefront Session Module
//!
//! Everything a single shopper session owns: the cart, the active filters,
//! the view selection, and the latest assistant response. State is updated
//! through a reducer: each action yields a fresh snapshot, which keeps the
//! transitions easy to test and replay.

pub mod actions;
pub mod helpers;
pub mod state;

// Re-export commonly used types for convenience
pub use actions::{reduce, Action};
pub use helpers::get_or_create_session_id;
pub use state::SessionState;
