//! `GeminiClient` against a local stand-in for the `generateContent` API.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use prokontra::{DomainError, GeminiClient, GenerationClient};

#[derive(Default)]
struct Captured {
    path: Option<String>,
    api_key: Option<String>,
    body: Option<Value>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Captured>>,
}

async fn stub_handler(
    State(state): State<StubState>,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut captured = state.captured.lock().unwrap();
    captured.path = Some(uri.path().to_string());
    captured.api_key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    captured.body = Some(body);
    (state.status, Json(state.reply.clone()))
}

/// Start the stub and return its base URL plus what it captured.
async fn start_stub(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let state = StubState {
        status,
        reply,
        captured: captured.clone(),
    };
    let app = Router::new().fallback(stub_handler).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

#[tokio::test]
async fn sends_instruction_and_prompt_and_joins_parts() {
    let reply = json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{"text": "```json\n{\"pros\": []"}, {"text": ", \"cons\": []}\n```"}]
            },
            "finishReason": "STOP"
        }]
    });
    let (base_url, captured) = start_stub(StatusCode::OK, reply).await;

    let client = GeminiClient::new("test-key", "gemini-1.5-flash", base_url);
    let text = client.generate("system text", "user prompt").await.unwrap();

    assert_eq!(text, "```json\n{\"pros\": [], \"cons\": []}\n```");

    let captured = captured.lock().unwrap();
    assert_eq!(
        captured.path.as_deref(),
        Some("/v1beta/models/gemini-1.5-flash:generateContent")
    );
    assert_eq!(captured.api_key.as_deref(), Some("test-key"));
    assert_eq!(
        captured.body.as_ref().unwrap(),
        &json!({
            "systemInstruction": {"parts": [{"text": "system text"}]},
            "contents": [{"role": "user", "parts": [{"text": "user prompt"}]}]
        })
    );
}

#[tokio::test]
async fn error_status_is_a_generation_error() {
    let (base_url, _) = start_stub(
        StatusCode::TOO_MANY_REQUESTS,
        json!({"error": {"message": "quota exceeded"}}),
    )
    .await;

    let client = GeminiClient::new("test-key", "gemini-1.5-flash", base_url);
    let err = client.generate("s", "p").await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamGenerationError(_)));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
async fn blocked_prompt_is_a_generation_error() {
    let (base_url, _) = start_stub(
        StatusCode::OK,
        json!({"promptFeedback": {"blockReason": "SAFETY"}}),
    )
    .await;

    let client = GeminiClient::new("test-key", "gemini-1.5-flash", base_url);
    let err = client.generate("s", "p").await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamGenerationError(_)));
    assert!(err.to_string().contains("SAFETY"));
}

#[tokio::test]
async fn unreachable_server_is_a_generation_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("test-key", "gemini-1.5-flash", format!("http://{addr}"));
    let err = client.generate("s", "p").await.unwrap_err();

    assert!(matches!(err, DomainError::UpstreamGenerationError(_)));
}
