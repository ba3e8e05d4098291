use serde::{Deserialize, Serialize};

use super::Language;

/// A topic to analyse and the language the analysis must be written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    topic: String,
    language: Language,
}

impl AnalysisRequest {
    pub fn new(topic: impl Into<String>, language: Language) -> Self {
        Self {
            topic: topic.into(),
            language,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// A topic made only of whitespace counts as missing.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub store: String,
    pub price: String,
}

impl PriceComparison {
    pub fn new(store: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            price: price.into(),
        }
    }
}

/// The payload returned by `POST /generate`.
///
/// `shoppingLink` is always serialized, as `null` when the topic is not a product.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pros: Vec<String>,
    #[serde(default)]
    cons: Vec<String>,
    #[serde(default)]
    price_comparisons: Vec<PriceComparison>,
    #[serde(default)]
    shopping_link: Option<String>,
}

impl AnalysisResult {
    pub fn new(pros: Vec<String>, cons: Vec<String>) -> Self {
        Self {
            pros,
            cons,
            price_comparisons: Vec::new(),
            shopping_link: None,
        }
    }

    pub fn with_price_comparisons(mut self, comparisons: Vec<PriceComparison>) -> Self {
        self.price_comparisons = comparisons;
        self
    }

    pub fn with_shopping_link(mut self, link: Option<String>) -> Self {
        self.shopping_link = link;
        self
    }

    pub fn pros(&self) -> &[String] {
        &self.pros
    }

    pub fn cons(&self) -> &[String] {
        &self.cons
    }

    pub fn price_comparisons(&self) -> &[PriceComparison] {
        &self.price_comparisons
    }

    pub fn shopping_link(&self) -> Option<&str> {
        self.shopping_link.as_deref()
    }
}
