use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{AnalysisGateway, GatewayError};
use crate::domain::{AnalysisRequest, AnalysisResult};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
const GENERATE_PATH: &str = "/generate";

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for a running server's `POST /generate` endpoint.
///
/// Error responses surface the server's `error` message verbatim; a failure
/// response without one becomes `HTTP error! status: <code>`.
pub struct HttpAnalysisGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpAnalysisGateway {
    pub fn new(server_url: impl Into<String>) -> Self {
        let base: String = server_url.into();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{GENERATE_PATH}", base.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, GatewayError> {
        debug!("HttpAnalysisGateway: POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("HttpAnalysisGateway: request failed: {e}");
                GatewayError::new(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(GatewayError::new(message));
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| GatewayError::new(format!("Invalid response from server: {e}")))
    }
}
