use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{AnalysisResult, PriceComparison};
use crate::domain::services::shopping_link;

/// The JSON object the model is instructed to produce.
///
/// Parsing is lenient about what the model tends to get wrong: absent or
/// `null` fields take their empty defaults, list elements or prices that are
/// not strings are kept as their JSON text, and `isProduct` is read by
/// truthiness (`"true"` and `1` count as a product, `""` and `0` do not).
/// Only text that is not a JSON object fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    #[serde(default, deserialize_with = "truthy")]
    pub is_product: bool,
    #[serde(default, deserialize_with = "text_or_null")]
    pub product_search_term: String,
    #[serde(default, deserialize_with = "text_list")]
    pub pros: Vec<String>,
    #[serde(default, deserialize_with = "text_list")]
    pub cons: Vec<String>,
    #[serde(default, deserialize_with = "price_list")]
    pub price_comparisons: Vec<PriceComparison>,
}

impl ModelAnalysis {
    pub fn shopping_link(&self) -> Option<String> {
        shopping_link(self.is_product, &self.product_search_term)
    }

    pub fn into_result(self) -> AnalysisResult {
        let link = self.shopping_link();
        AnalysisResult::new(self.pros, self.cons)
            .with_price_comparisons(self.price_comparisons)
            .with_shopping_link(link)
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Array elements, a lone scalar as a one-element list, or nothing for `null`.
fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

fn text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(into_items(Value::deserialize(deserializer)?)
        .into_iter()
        .filter(|item| !item.is_null())
        .map(value_to_text)
        .collect())
}

/// Keeps entries that are objects; other elements carry no store or price.
fn price_list<'de, D>(deserializer: D) -> Result<Vec<PriceComparison>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(into_items(Value::deserialize(deserializer)?)
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(mut fields) => Some(PriceComparison::new(
                value_to_text(fields.remove("store").unwrap_or(Value::Null)),
                value_to_text(fields.remove("price").unwrap_or(Value::Null)),
            )),
            _ => None,
        })
        .collect())
}
