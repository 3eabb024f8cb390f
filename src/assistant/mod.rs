//! Shopping Assistant Module
//!
//! Boundary around the external generative-text service:
//! - `SuggestionClient` trait, the narrow seam a test double can stand in for
//! - `GeminiClient`, the HTTP implementation
//! - `AssistantGateway`, which builds prompts, condenses the catalog, and
//!   converts every failure into a friendly fallback string

pub mod client;
pub mod error;
pub mod gateway;

// Re-export commonly used types for convenience
pub use client::{GeminiClient, SuggestionClient};
pub use error::AssistantError;
pub use gateway::{AssistantGateway, DESCRIPTION_FALLBACK, SUGGESTION_FALLBACK};
