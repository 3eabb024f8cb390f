//! Catalog Domain Models
//!
//! This module contains the data structures describing what the storefront
//! sells. Products are built once from seed data and never mutated.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// The fixed set of storefront categories.
///
/// `All` is the neutral filter value meaning "no category restriction"; no
/// product in the seed data carries it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    All,
    Electronics,
    Fashion,
    Home,
    Gadgets,
    Health,
}

/// A purchasable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: String,

    /// Display name of the product
    pub name: String,

    /// Category the product is listed under (never `All`)
    pub category: Category,

    /// Price in whole currency units; minor units are not tracked
    pub price: u32,

    /// Marketing description shown on the detail view
    pub description: String,

    /// Average shopper rating, 0.0 to 5.0
    pub rating: f32,

    /// Units currently in stock
    pub stock: u32,

    /// Opaque image URI; the core never dereferences it
    pub image: String,
}
