//! Routing module for the storefront application

pub mod assistant;
pub mod storefront;

use crate::state::SharedState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(storefront::routes())
        .merge(assistant::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}
