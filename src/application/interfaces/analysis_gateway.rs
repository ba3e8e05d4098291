use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AnalysisRequest, AnalysisResult, DomainError};

/// Failure as the presentation layer sees it: a message meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        Self::new(err.client_message())
    }
}

/// Where the presentation layer sends an analysis request.
///
/// Implemented in-process by the use case and remotely by the HTTP client for
/// `POST /generate`.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, GatewayError>;
}
