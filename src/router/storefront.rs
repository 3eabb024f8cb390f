//! Storefront route handlers
//!
//! The rendering layer's entire mutating surface is one endpoint: POST
//! /dispatch applies a single reducer action and returns the fresh derived
//! view. Reads go through GET /catalog (stateless filter) and POST /state
//! (per-session snapshot).

use crate::catalog::filter::filter_products;
use crate::catalog::models::Category;
use crate::session::actions::Action;
use crate::session::helpers::get_or_create_session_id;
use crate::state::{AppState, SharedState};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

/// Creates routes for catalog and session-state operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/state", post(read_state))
        .route("/dispatch", post(dispatch))
}

// =============================================================================
// Wire Models
// =============================================================================

/// Query parameters for GET /catalog
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<Category>,
    pub q: Option<String>,
}

/// Input for POST /state
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInput {
    pub session_id: Option<String>,
}

/// Input for POST /dispatch
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchInput {
    pub session_id: Option<String>,
    pub action: ActionInput,
}

/// Wire form of a session action. Cart actions reference products by id;
/// the handler resolves them against the catalog.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ActionInput {
    AddToCart { product_id: String },
    RemoveFromCart { product_id: String },
    UpdateQuantity { product_id: String, delta: i64 },
    SetCategory { category: Category },
    SetSearch { query: String },
    SelectProduct { product_id: Option<String> },
    SetCartOpen { open: bool },
    SetMenuOpen { open: bool },
    GoHome,
    DismissAssistant,
}

// =============================================================================
// Handlers
// =============================================================================

/// Endpoint: GET /catalog
/// Returns the catalog filtered by the optional category and query params.
async fn list_catalog(
    State(state): State<SharedState>,
    Query(params): Query<CatalogQuery>,
) -> impl IntoResponse {
    let category = params.category.unwrap_or(Category::All);
    let query = params.q.unwrap_or_default();

    Json(filter_products(&state.catalog, category, &query))
}

/// Endpoint: POST /state
/// Returns the derived view of a session, creating it on first contact.
async fn read_state(
    State(state): State<SharedState>,
    Json(payload): Json<SessionInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);
    Json(state.snapshot(&session_id))
}

/// Endpoint: POST /dispatch
/// Applies one reducer action and returns the new derived view.
async fn dispatch(
    State(state): State<SharedState>,
    Json(payload): Json<DispatchInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);

    if let Some(action) = resolve_action(&state, payload.action) {
        state.apply(&session_id, action);
    }

    Json(state.snapshot(&session_id))
}

/// Maps a wire action onto a reducer action.
///
/// An add-to-cart naming an unknown product id resolves to `None` and the
/// dispatch becomes a silent no-op; every other lookup miss is already a
/// no-op inside the cart operations.
fn resolve_action(state: &AppState, input: ActionInput) -> Option<Action> {
    match input {
        ActionInput::AddToCart { product_id } => state
            .find_product(&product_id)
            .cloned()
            .map(Action::AddToCart),
        ActionInput::RemoveFromCart { product_id } => Some(Action::RemoveFromCart(product_id)),
        ActionInput::UpdateQuantity { product_id, delta } => {
            Some(Action::UpdateQuantity { product_id, delta })
        }
        ActionInput::SetCategory { category } => Some(Action::SetCategory(category)),
        ActionInput::SetSearch { query } => Some(Action::SetSearch(query)),
        ActionInput::SelectProduct { product_id } => Some(Action::SelectProduct(product_id)),
        ActionInput::SetCartOpen { open } => Some(Action::SetCartOpen(open)),
        ActionInput::SetMenuOpen { open } => Some(Action::SetMenuOpen(open)),
        ActionInput::GoHome => Some(Action::GoHome),
        ActionInput::DismissAssistant => Some(Action::DismissAssistant),
    }
}
