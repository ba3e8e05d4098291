use anyhow::Result;
use async_trait::async_trait;

use crate::application::{AnalysisGateway, GatewayError};
use crate::domain::{AnalysisRequest, AnalysisResult, DomainError, Language};
use crate::presentation::Session;

use super::super::Container;
use super::finish;

/// Stands in for the use case when no generation client could be built.
struct UnavailableGateway;

#[async_trait]
impl AnalysisGateway for UnavailableGateway {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, GatewayError> {
        Err(DomainError::upstream_unavailable("generation client was not initialized").into())
    }
}

/// Runs an analysis in-process and renders the resulting view.
pub struct AnalyzeController<'a> {
    container: &'a Container,
}

impl<'a> AnalyzeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn analyze(&self, topic: String, language: Language) -> Result<String> {
        let mut session = Session::new(language);

        match self.container.analyze_use_case() {
            Some(use_case) => session.submit(use_case.as_ref(), &topic).await,
            None => session.submit(&UnavailableGateway, &topic).await,
        };

        finish(&session)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::connector::api::ContainerConfig;

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            key_file: PathBuf::from("does-not-exist.txt"),
            mock_ai: true,
        })
    }

    #[tokio::test]
    async fn successful_analysis_returns_rendered_view() {
        let container = mock_container();
        let output = AnalyzeController::new(&container)
            .analyze("Buy an electric car".into(), Language::English)
            .await
            .unwrap();

        assert!(output.contains("Pros:"));
        assert!(output.contains("Compare Prices:"));
    }

    #[tokio::test]
    async fn error_view_fails_the_command() {
        let container = mock_container();
        let err = AnalyzeController::new(&container)
            .analyze("   ".into(), Language::English)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Topic cannot be empty.");
    }
}
