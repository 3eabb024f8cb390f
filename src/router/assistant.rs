//! Assistant route handlers

use crate::session::actions::Action;
use crate::session::helpers::get_or_create_session_id;
use crate::state::SharedState;
use axum::{extract::State, response::IntoResponse, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Shown when the service answers successfully but with no text at all.
const NO_SUGGESTIONS: &str = "No suggestions found.";

/// Creates routes for assistant operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/assistant/suggest", post(suggest))
        .route("/assistant/describe", post(describe))
}

/// Input for POST /assistant/suggest
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestInput {
    pub session_id: Option<String>,
    pub query: String,
}

/// Input for POST /assistant/describe
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeInput {
    pub product_name: String,
}

/// Response for POST /assistant/describe
#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub description: String,
}

/// Endpoint: POST /assistant/suggest
/// Runs the AI search for a session and returns the new derived view.
///
/// Empty queries never reach the generative service. Two overlapping calls
/// for the same session both resolve; whichever resolves last owns the
/// response slot.
async fn suggest(
    State(state): State<SharedState>,
    Json(payload): Json<SuggestInput>,
) -> impl IntoResponse {
    let session_id = get_or_create_session_id(payload.session_id);
    let query = payload.query.trim().to_string();

    if query.is_empty() {
        return Json(state.snapshot(&session_id));
    }

    info!(%session_id, %query, "assistant suggestion requested");
    state.apply(&session_id, Action::AssistantPending);

    // No session guard is held here: dispatch and state reads stay
    // available while the call is in flight.
    let mut text = state.assistant.suggest(&query, &state.catalog).await;
    if text.is_empty() {
        text = NO_SUGGESTIONS.to_string();
    }

    state.apply(&session_id, Action::AssistantResolved(text));
    Json(state.snapshot(&session_id))
}

/// Endpoint: POST /assistant/describe
/// Generates marketing copy for a product name.
async fn describe(
    State(state): State<SharedState>,
    Json(payload): Json<DescribeInput>,
) -> impl IntoResponse {
    let description = state.assistant.describe_product(&payload.product_name).await;
    Json(DescribeResponse { description })
}
