use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, AppState};
use crate::domain::{AnalysisRequest, AnalysisResult, DomainError, Language};

/// Body of `POST /generate`. Both fields are optional on the wire so that a
/// missing topic can be answered with the endpoint's own error shape.
/// `language` accepts any JSON value; anything but a known code means Indonesian.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub language: Option<Value>,
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let analyzer = state.analyzer.as_ref().ok_or_else(|| {
        DomainError::upstream_unavailable("generation client was not initialized")
    })?;

    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected /generate body: {}", rejection.body_text());
        DomainError::MissingTopic
    })?;

    let language = Language::from_code_or_default(body.language.as_ref().and_then(Value::as_str));
    let request = AnalysisRequest::new(body.topic.unwrap_or_default(), language);
    debug!("POST /generate {:?}", request);

    let result = analyzer.execute(&request).await?;
    Ok(Json(result))
}
