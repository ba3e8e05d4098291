use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::application::GenerationClient;
use crate::domain::{DomainError, Language};

const TOPIC_MARKER: &str = "Analyze this topic: \"";
const TOPIC_END: &str = "\".\nYour entire response";
const PURCHASE_WORDS: [&str; 4] = ["buy", "beli", "purchase", "order"];
const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Deterministic stand-in for a real model, for local development and tests.
///
/// Reads the topic back out of the prompt and answers with a fenced JSON
/// object, the way real models often do. Topics that start with a purchase
/// verb ("buy", "beli", ...) are treated as products with three sample prices.
pub struct MockGenerationClient;

impl MockGenerationClient {
    pub fn new() -> Self {
        Self
    }

    fn topic_from_prompt(prompt: &str) -> &str {
        prompt
            .find(TOPIC_MARKER)
            .map(|start| &prompt[start + TOPIC_MARKER.len()..])
            .and_then(|rest| rest.rfind(TOPIC_END).map(|end| &rest[..end]))
            .unwrap_or("")
    }

    /// Product name for a purchase topic, e.g. "Buy an electric car" -> "electric car".
    fn product_term(topic: &str) -> Option<String> {
        let mut words = topic.split_whitespace().peekable();
        let first = words.next()?;
        if !PURCHASE_WORDS.contains(&first.to_lowercase().as_str()) {
            return None;
        }
        if words
            .peek()
            .is_some_and(|w| ARTICLES.contains(&w.to_lowercase().as_str()))
        {
            words.next();
        }
        let term = words.collect::<Vec<_>>().join(" ");
        (!term.is_empty()).then_some(term)
    }

    fn reply(topic: &str, language: Language) -> serde_json::Value {
        let product = Self::product_term(topic);
        let (pros, cons) = match language {
            Language::Indonesian => (
                vec![
                    format!("{topic} memberikan manfaat jangka panjang"),
                    "Banyak pilihan tersedia".to_string(),
                ],
                vec![
                    format!("{topic} membutuhkan biaya awal"),
                    "Perlu riset sebelum memutuskan".to_string(),
                ],
            ),
            Language::English => (
                vec![
                    format!("{topic} offers long-term benefits"),
                    "Many options are available".to_string(),
                ],
                vec![
                    format!("{topic} requires an upfront cost"),
                    "Needs research before deciding".to_string(),
                ],
            ),
        };

        let price_comparisons = if product.is_some() {
            json!([
                {"store": "Store A", "price": "$100"},
                {"store": "Store B", "price": "$105"},
                {"store": "Store C", "price": "$98"}
            ])
        } else {
            json!([])
        };

        json!({
            "isProduct": product.is_some(),
            "productSearchTerm": product.unwrap_or_default(),
            "pros": pros,
            "cons": cons,
            "priceComparisons": price_comparisons,
        })
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String, DomainError> {
        let language = if system_instruction.contains(Language::English.display_name()) {
            Language::English
        } else {
            Language::Indonesian
        };
        let topic = Self::topic_from_prompt(prompt);
        debug!("MockGenerationClient: topic={topic:?} language={language}");

        let body = serde_json::to_string_pretty(&Self::reply(topic, language))
            .map_err(|e| DomainError::internal(e.to_string()))?;
        Ok(format!("```json\n{body}\n```"))
    }

    fn model_name(&self) -> &str {
        "mock-generation"
    }
}
