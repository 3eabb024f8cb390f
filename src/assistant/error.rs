//! Assistant error taxonomy.
//!
//! These errors never leave the assistant module: the gateway converts each
//! of them into a fallback string before the caller sees anything.

use thiserror::Error;

/// Failure modes of a generative-text call.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("request to generative service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("generative service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response parsed as JSON but carried no generated text
    #[error("generative service response carried no text")]
    MalformedResponse,
}
