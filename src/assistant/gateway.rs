//! Assistant Gateway
//!
//! Builds prompts for the shopping assistant and shields the rest of the
//! storefront from the generative service: every failure is converted into
//! a fixed fallback string here, never surfaced to the shopper.

use super::client::SuggestionClient;
use crate::catalog::models::Product;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Served whenever a suggestion call fails for any reason.
pub const SUGGESTION_FALLBACK: &str = "I'm having trouble connecting to my AI brain right now, but I recommend checking out our top-rated electronics!";

/// Served whenever a description call fails for any reason.
pub const DESCRIPTION_FALLBACK: &str = "Quality product designed for your everyday needs.";

/// Fixed framing for every suggestion request.
const SYSTEM_INSTRUCTION: &str = "You are an expert shopping assistant for ShopBase BD. You help users find the perfect product from our catalog.";

/// Reduced product view sent to the assistant. Price, stock, and image are
/// deliberately omitted to keep the payload small.
#[derive(Serialize)]
struct CondensedProduct<'a> {
    id: &'a str,
    name: &'a str,
    desc: &'a str,
}

/// Boundary component wrapping the external generative-text call.
#[derive(Clone)]
pub struct AssistantGateway {
    client: Arc<dyn SuggestionClient>,
}

impl AssistantGateway {
    pub fn new(client: Arc<dyn SuggestionClient>) -> Self {
        Self { client }
    }

    /// Asks the assistant for a product suggestion matching `query`.
    ///
    /// Returns the generated text verbatim, or [`SUGGESTION_FALLBACK`] when
    /// the service is unreachable or answers with garbage. Callers must not
    /// invoke this with an empty query. Safe to call again with the same
    /// query; repeated calls are merely redundant.
    pub async fn suggest(&self, query: &str, catalog: &[Product]) -> String {
        let prompt = build_suggestion_prompt(query, catalog);

        match self.client.generate(&prompt, Some(SYSTEM_INSTRUCTION)).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "assistant suggestion failed, serving fallback");
                SUGGESTION_FALLBACK.to_string()
            }
        }
    }

    /// Asks the assistant to write marketing copy for a product name.
    pub async fn describe_product(&self, product_name: &str) -> String {
        let prompt = format!(
            "Generate a catchy, professional, and SEO-friendly e-commerce product description for: \"{product_name}\". Include key features and benefits."
        );

        match self.client.generate(&prompt, None).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "product description failed, serving fallback");
                DESCRIPTION_FALLBACK.to_string()
            }
        }
    }
}

/// Assembles the suggestion prompt: the literal user query plus the
/// condensed catalog as JSON.
fn build_suggestion_prompt(query: &str, catalog: &[Product]) -> String {
    let condensed: Vec<CondensedProduct> = catalog
        .iter()
        .map(|p| CondensedProduct {
            id: &p.id,
            name: &p.name,
            desc: &p.description,
        })
        .collect();
    let condensed_json = serde_json::to_string(&condensed).unwrap_or_else(|_| "[]".to_string());

    format!(
        "User is looking for: \"{query}\". Here is our product list: {condensed_json}. Based on the user's intent, suggest the best product IDs and explain why in a short friendly tone."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::error::AssistantError;
    use crate::catalog::seed::seed_products;
    use async_trait::async_trait;

    struct ScriptedClient(String);

    #[async_trait]
    impl SuggestionClient for ScriptedClient {
        async fn generate(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<String, AssistantError> {
            Ok(self.0.clone())
        }
    }

    struct FailingClient;

    #[async_trait]
    impl SuggestionClient for FailingClient {
        async fn generate(
            &self,
            _prompt: &str,
            _system_instruction: Option<&str>,
        ) -> Result<String, AssistantError> {
            Err(AssistantError::MalformedResponse)
        }
    }

    #[test]
    fn prompt_carries_query_and_condensed_catalog_only() {
        let catalog = seed_products();
        let prompt = build_suggestion_prompt("something for my desk", &catalog);

        assert!(prompt.contains("something for my desk"));
        assert!(prompt.contains("Smart RGB Desk Lamp"));
        // Condensed view: id/name/desc only.
        assert!(!prompt.contains("\"price\""));
        assert!(!prompt.contains("\"stock\""));
        assert!(!prompt.contains("picsum.photos"));
    }

    #[tokio::test]
    async fn suggest_returns_generated_text_verbatim() {
        let gateway = AssistantGateway::new(Arc::new(ScriptedClient("Try product 7!".into())));
        let text = gateway.suggest("a health tracker", &seed_products()).await;
        assert_eq!(text, "Try product 7!");
    }

    #[tokio::test]
    async fn suggest_recovers_every_failure_with_the_fallback() {
        let gateway = AssistantGateway::new(Arc::new(FailingClient));
        let text = gateway.suggest("a health tracker", &seed_products()).await;
        assert_eq!(text, SUGGESTION_FALLBACK);
    }

    #[tokio::test]
    async fn describe_product_falls_back_on_failure() {
        let gateway = AssistantGateway::new(Arc::new(FailingClient));
        let text = gateway.describe_product("Smart Fitness Ring").await;
        assert_eq!(text, DESCRIPTION_FALLBACK);
    }
}
