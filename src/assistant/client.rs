//! Generative-text clients.

use super::error::AssistantError;
use async_trait::async_trait;
use serde_json::{json, Value};

/// Base URL of the Gemini REST API.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// A client capable of turning one prompt into generated text.
///
/// The storefront core only ever talks to the assistant through this trait,
/// so tests swap in scripted doubles without touching cart or catalog logic.
#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Sends one prompt to the service, optionally framed by a system
    /// instruction, and returns the generated text.
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, AssistantError>;
}

/// Gemini `generateContent` client.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl SuggestionClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, AssistantError> {
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);

        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });
        if let Some(instruction) = system_instruction {
            body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
        }

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssistantError::Status(response.status()));
        }

        let payload: Value = response.json().await?;
        payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(AssistantError::MalformedResponse)
    }
}
