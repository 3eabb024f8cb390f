//! Product Catalog Domain Module
//!
//! The catalog is the static set of purchasable products for a session:
//! - Domain models (Product, Category)
//! - Seed data loaded once at startup
//! - Filtering by category and free-text query

pub mod filter;
pub mod models;
pub mod seed;

// Re-export commonly used types for convenience
pub use filter::filter_products;
pub use models::{Category, Product};
pub use seed::seed_products;
