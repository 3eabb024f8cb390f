//! Application State Management
//!
//! This module owns the process-wide state: the immutable catalog, the
//! per-session snapshots, and the assistant gateway. It also builds the
//! derived `StateView` the rendering layer consumes.

use crate::assistant::gateway::AssistantGateway;
use crate::cart::models::CartItem;
use crate::catalog::models::{Category, Product};
use crate::catalog::seed::seed_products;
use crate::session::actions::{reduce, Action};
use crate::session::state::SessionState;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: catalog, sessions, and the assistant gateway.
pub struct AppState {
    /// The immutable product catalog, built once at startup.
    pub catalog: Vec<Product>,

    /// In-memory storage for sessions, keyed by session_id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, SessionState>,

    /// Boundary to the generative shopping assistant.
    pub assistant: AssistantGateway,
}

impl AppState {
    /// Creates a new AppState over the seed catalog.
    pub fn new(assistant: AssistantGateway) -> Self {
        Self::with_catalog(seed_products(), assistant)
    }

    /// Creates a new AppState over an explicit catalog (used by tests).
    pub fn with_catalog(catalog: Vec<Product>, assistant: AssistantGateway) -> Self {
        Self {
            catalog,
            sessions: DashMap::new(),
            assistant,
        }
    }

    /// Applies one reducer action to a session, creating the session on
    /// first use. The map guard is released before this returns; callers
    /// never hold it across an await.
    pub fn apply(&self, session_id: &str, action: Action) {
        let mut entry = self.sessions.entry(session_id.to_string()).or_default();
        let next = reduce(&entry, action);
        *entry = next;
    }

    /// Builds the derived view of a session, creating it on first read.
    pub fn snapshot(&self, session_id: &str) -> StateView {
        let session = self
            .sessions
            .entry(session_id.to_string())
            .or_default()
            .clone();
        StateView::build(session_id, &session, &self.catalog)
    }

    /// Looks up a catalog product by id.
    pub fn find_product(&self, product_id: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.id == product_id)
    }
}

// =============================================================================
// Derived View
// =============================================================================

/// Everything the rendering layer reads, recomputed per request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub session_id: String,
    pub filtered_products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub cart_total: u64,
    pub cart_count: u64,
    pub active_category: Category,
    pub search_query: String,
    pub selected_product: Option<Product>,
    pub cart_open: bool,
    pub menu_open: bool,
    pub assistant_response: Option<String>,
    pub assistant_pending: bool,
}

impl StateView {
    fn build(session_id: &str, session: &SessionState, catalog: &[Product]) -> Self {
        let selected_product = session
            .selected_product
            .as_deref()
            .and_then(|id| catalog.iter().find(|p| p.id == id))
            .cloned();

        Self {
            session_id: session_id.to_string(),
            filtered_products: session.filtered_products(catalog),
            cart: session.cart.clone(),
            cart_total: session.cart_total(),
            cart_count: session.cart_count(),
            active_category: session.active_category,
            search_query: session.search_query.clone(),
            selected_product,
            cart_open: session.cart_open,
            menu_open: session.menu_open,
            assistant_response: session.assistant_response.clone(),
            assistant_pending: session.assistant_pending,
        }
    }
}
