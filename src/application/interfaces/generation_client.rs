use async_trait::async_trait;

use crate::domain::DomainError;

/// Sends a prompt to a generative-language model and returns its reply text.
///
/// Implementors own the provider's wire format; the use case only sees text.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a reply to `prompt` under the given `system_instruction`.
    ///
    /// Transport and API failures are reported as
    /// [`DomainError::UpstreamGenerationError`].
    async fn generate(&self, system_instruction: &str, prompt: &str) -> Result<String, DomainError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}
