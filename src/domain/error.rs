use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream parse error: {0}")]
    UpstreamParseError(String),

    #[error("Upstream generation error: {0}")]
    UpstreamGenerationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn upstream_unavailable(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    pub fn upstream_parse(msg: impl Into<String>) -> Self {
        Self::UpstreamParseError(msg.into())
    }

    pub fn upstream_generation(msg: impl Into<String>) -> Self {
        Self::UpstreamGenerationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Errors caused by the caller's input rather than the upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingTopic | Self::InvalidInput(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UpstreamParseError(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }

    /// Message shown to end users. Upstream details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingTopic => "Topic is required".to_string(),
            Self::InvalidInput(msg) => msg.clone(),
            Self::UpstreamUnavailable(_) => "AI is not initialized".to_string(),
            Self::UpstreamParseError(_) => "Failed to parse AI response".to_string(),
            Self::UpstreamGenerationError(_) => "Failed to generate content".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}
