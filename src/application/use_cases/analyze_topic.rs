use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::application::{AnalysisGateway, GatewayError, GenerationClient};
use crate::domain::{
    build_analysis_prompt, build_system_instruction, parse_analysis, AnalysisRequest,
    AnalysisResult, DomainError,
};

pub struct AnalyzeTopicUseCase {
    client: Arc<dyn GenerationClient>,
}

impl AnalyzeTopicUseCase {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    /// Generate and parse a pro/con analysis for the request's topic.
    ///
    /// A blank topic fails with [`DomainError::MissingTopic`] without contacting
    /// the model. Generation and parse failures are returned as-is; nothing is
    /// retried.
    pub async fn execute(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DomainError> {
        if !request.has_topic() {
            return Err(DomainError::MissingTopic);
        }

        info!(
            "Analyzing topic: {} (language={}, model={})",
            request.topic().trim(),
            request.language(),
            self.client.model_name()
        );

        let start_time = Instant::now();

        let system_instruction = build_system_instruction(request.language());
        let prompt = build_analysis_prompt(request.topic());

        let raw = self.client.generate(&system_instruction, &prompt).await?;
        debug!("Raw model response:\n{}", raw);

        let result = parse_analysis(&raw)?;
        debug!("Parsed analysis: {:?}", result);

        info!(
            "Analysis ready in {:.2}s ({} pros, {} cons, {} prices, shopping link: {})",
            start_time.elapsed().as_secs_f64(),
            result.pros().len(),
            result.cons().len(),
            result.price_comparisons().len(),
            result.shopping_link().is_some()
        );

        Ok(result)
    }
}

#[async_trait]
impl AnalysisGateway for AnalyzeTopicUseCase {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, GatewayError> {
        self.execute(request).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct ScriptedClient {
        reply: Result<String, String>,
        calls: AtomicUsize,
        last_system: Mutex<Option<String>>,
    }

    impl ScriptedClient {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_system: Mutex::new(None),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(msg.to_string()),
                calls: AtomicUsize::new(0),
                last_system: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl GenerationClient for ScriptedClient {
        async fn generate(&self, system_instruction: &str, _prompt: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_system.lock().unwrap() = Some(system_instruction.to_string());
            self.reply.clone().map_err(DomainError::upstream_generation)
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn blank_topics_never_reach_the_model() {
        let client = ScriptedClient::replying("{}");
        let use_case = AnalyzeTopicUseCase::new(client.clone());

        for topic in ["", " ", "\t\n  "] {
            let err = use_case
                .execute(&AnalysisRequest::new(topic, Language::English))
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::MissingTopic));
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn system_instruction_follows_request_language() {
        let client = ScriptedClient::replying(r#"{"pros": [], "cons": []}"#);
        let use_case = AnalyzeTopicUseCase::new(client.clone());

        use_case
            .execute(&AnalysisRequest::new("kopi", Language::Indonesian))
            .await
            .unwrap();

        let system = client.last_system.lock().unwrap().clone().unwrap();
        assert!(system.contains("Indonesian"));
    }

    #[tokio::test]
    async fn fenced_reply_is_parsed() {
        let client = ScriptedClient::replying(
            "```json\n{\"isProduct\": true, \"productSearchTerm\": \"e-bike\", \"pros\": [\"fun\"], \"cons\": [\"theft\"]}\n```",
        );
        let use_case = AnalyzeTopicUseCase::new(client);

        let result = use_case
            .execute(&AnalysisRequest::new("Buy an e-bike", Language::English))
            .await
            .unwrap();

        assert_eq!(result.pros(), ["fun".to_string()]);
        assert!(result.price_comparisons().is_empty());
        assert_eq!(
            result.shopping_link(),
            Some("https://www.google.com/search?tbm=shop&q=e-bike")
        );
    }

    #[tokio::test]
    async fn unparseable_reply_is_a_parse_error() {
        let use_case = AnalyzeTopicUseCase::new(ScriptedClient::replying("I cannot help with that."));
        let err = use_case
            .execute(&AnalysisRequest::new("anything", Language::English))
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[tokio::test]
    async fn generation_failure_is_propagated_once() {
        let client = ScriptedClient::failing("quota exceeded");
        let use_case = AnalyzeTopicUseCase::new(client.clone());

        let err = use_case
            .execute(&AnalysisRequest::new("anything", Language::English))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UpstreamGenerationError(_)));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn gateway_reports_client_messages() {
        let use_case = AnalyzeTopicUseCase::new(ScriptedClient::replying("not json"));
        let err = use_case
            .analyze(&AnalysisRequest::new("anything", Language::English))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Failed to parse AI response");
    }
}
