use std::sync::Arc;

use crate::application::AnalyzeTopicUseCase;

/// Application state shared across handlers.
///
/// `analyzer` is `None` when no API credential was found at startup; the
/// server still runs and answers `/generate` with "AI is not initialized".
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Option<Arc<AnalyzeTopicUseCase>>,
}

impl AppState {
    pub fn new(analyzer: Option<Arc<AnalyzeTopicUseCase>>) -> Self {
        Self { analyzer }
    }
}
