use shopbase_storefront::assistant::client::GeminiClient;
use shopbase_storefront::assistant::gateway::AssistantGateway;
use shopbase_storefront::config::Config;
use shopbase_storefront::router::create_app_router;
use shopbase_storefront::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Read configuration from the environment
    let config = Config::from_env();
    if config.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; the assistant will only serve its fallback message");
    }

    // Initialize application state
    let client = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    let state = Arc::new(AppState::new(AssistantGateway::new(client)));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    tracing::info!("storefront serving on http://{}", config.bind_addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
