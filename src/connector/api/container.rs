use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::{AnalyzeTopicUseCase, GenerationClient};
use crate::connector::adapter::{
    load_api_credential, GeminiClient, HttpAnalysisGateway, MockGenerationClient,
    DEFAULT_KEY_FILE,
};
use crate::connector::http::AppState;

pub struct ContainerConfig {
    /// Local-development fallback for `GEMINI_API_KEY`.
    pub key_file: PathBuf,
    /// Answer with the deterministic mock client instead of calling Gemini.
    pub mock_ai: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            key_file: PathBuf::from(DEFAULT_KEY_FILE),
            mock_ai: false,
        }
    }
}

pub struct Container {
    generation_client: Option<Arc<dyn GenerationClient>>,
}

impl Container {
    /// Assemble the object graph.
    ///
    /// A missing credential is logged, not fatal: the container is still built
    /// and analysis requests fail with "AI is not initialized".
    pub fn new(config: ContainerConfig) -> Self {
        let generation_client: Option<Arc<dyn GenerationClient>> = if config.mock_ai {
            debug!("Using mock generation client");
            Some(Arc::new(MockGenerationClient::new()))
        } else {
            match load_api_credential(&config.key_file) {
                Ok(credential) => {
                    info!("Initialized AI with {}", credential.source());
                    Some(Arc::new(GeminiClient::from_env(credential.key())))
                }
                Err(e) => {
                    error!("Error initializing the generation client: {e}");
                    None
                }
            }
        };

        Self { generation_client }
    }

    pub fn is_ai_initialized(&self) -> bool {
        self.generation_client.is_some()
    }

    pub fn analyze_use_case(&self) -> Option<Arc<AnalyzeTopicUseCase>> {
        self.generation_client
            .clone()
            .map(|client| Arc::new(AnalyzeTopicUseCase::new(client)))
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.analyze_use_case())
    }

    pub fn http_gateway(&self, server_url: &str) -> HttpAnalysisGateway {
        HttpAnalysisGateway::new(server_url)
    }
}
