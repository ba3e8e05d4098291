use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::GenerationClient;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODELS_PATH: &str = "/v1beta/models";
const GENERATE_METHOD: &str = "generateContent";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// The subset of the `generateContent` response we read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Configuration beyond the API key comes from the environment:
///
/// | Variable          | Default                                      |
/// |-------------------|----------------------------------------------|
/// | `GEMINI_MODEL`    | `gemini-1.5-flash`                           |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  |
///
/// Requests carry no timeout and are never retried.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + models path + model + method).
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{MODELS_PATH}/{model}:{GENERATE_METHOD}",
            base.trim_end_matches('/')
        );
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model,
            url,
        }
    }

    /// Build a client for `api_key`, reading model and base URL overrides from
    /// the environment.
    pub fn from_env(api_key: impl Into<String>) -> Self {
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, model, base)
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String, DomainError> {
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!("GeminiClient: POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream_generation(format!("GeminiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::upstream_generation(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: GenerateResponse = response.json().await.map_err(|e| {
            DomainError::upstream_generation(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        let Some(content) = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
        else {
            let reason = api_response
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(DomainError::upstream_generation(format!(
                "GeminiClient: empty response ({reason})"
            )));
        };

        Ok(content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join(""))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
