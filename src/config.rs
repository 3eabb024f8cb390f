//! Environment-driven configuration.

use std::net::SocketAddr;

/// Default Gemini model when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the presentation boundary listens on
    pub bind_addr: SocketAddr,

    /// API key for the generative service; empty means the assistant will
    /// only ever answer with its fallback message
    pub gemini_api_key: String,

    /// Gemini model name
    pub gemini_model: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Missing or unparsable values fall back to local-dev defaults; a
    /// missing API key degrades the assistant instead of failing startup.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("SHOPBASE_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
        }
    }
}
