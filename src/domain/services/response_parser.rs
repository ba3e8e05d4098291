//! Sanitize-then-parse for semi-structured model output.
//!
//! Models asked for "JSON only" still wrap their answer in markdown fences
//! fairly often, so the fence is removed before the text reaches `serde_json`.

use serde_json::Value;
use tracing::warn;

use crate::domain::{AnalysisResult, DomainError, ModelAnalysis};

const FENCE: &str = "```";

/// Remove a surrounding markdown code fence (` ``` ` or ` ```json `) and trim.
///
/// Text without a fence is only trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let body = match trimmed.strip_prefix(FENCE) {
        // The info string (`json`, `JSON`, ...) runs up to the first newline.
        Some(rest) => match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
        },
        None => trimmed,
    };

    body.trim_end().strip_suffix(FENCE).unwrap_or(body).trim()
}

/// Parse the model's reply into a [`ModelAnalysis`].
///
/// Fails with [`DomainError::UpstreamParseError`] when the cleaned text is not
/// a JSON object.
pub fn parse_model_output(text: &str) -> Result<ModelAnalysis, DomainError> {
    let cleaned = strip_code_fences(text);

    let value: Value = serde_json::from_str(cleaned).map_err(|e| {
        warn!("Failed to parse model response as JSON: {e}. Cleaned text: {cleaned}");
        DomainError::upstream_parse(format!("model response is not valid JSON: {e}"))
    })?;

    if !value.is_object() {
        warn!("Model response is JSON but not an object: {cleaned}");
        return Err(DomainError::upstream_parse(
            "model response is not a JSON object",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        warn!("Model response has an unexpected shape: {e}. Cleaned text: {cleaned}");
        DomainError::upstream_parse(format!("model response has an unexpected shape: {e}"))
    })
}

/// Full text → result step: sanitize, parse, derive the shopping link.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, DomainError> {
    parse_model_output(text).map(ModelAnalysis::into_result)
}
