use thiserror::Error;
use tracing::debug;

use super::{translations, Translations};
use crate::application::{AnalysisGateway, GatewayError};
use crate::domain::{AnalysisRequest, AnalysisResult, Language, PriceComparison};

/// Price comparisons together with the link to more offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSection {
    pub comparisons: Vec<PriceComparison>,
    pub shopping_link: String,
}

/// What the result area shows once an analysis arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    /// Present only when there is at least one comparison and a shopping link.
    pub price_section: Option<PriceSection>,
}

impl ResultView {
    /// Empty pro/con lists become a single localized placeholder line.
    pub fn from_result(result: AnalysisResult, text: &Translations) -> Self {
        let list_or = |items: &[String], placeholder: &str| {
            if items.is_empty() {
                vec![placeholder.to_string()]
            } else {
                items.to_vec()
            }
        };

        let price_section = match (result.price_comparisons(), result.shopping_link()) {
            (comparisons, Some(link)) if !comparisons.is_empty() => Some(PriceSection {
                comparisons: comparisons.to_vec(),
                shopping_link: link.to_string(),
            }),
            _ => None,
        };

        Self {
            pros: list_or(result.pros(), text.no_pros),
            cons: list_or(result.cons(), text.no_cons),
            price_section,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Result(ResultView),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a request is already in flight")]
    Busy,
    #[error("topic is empty")]
    EmptyTopic,
}

/// One user's view of the analyzer: current language and view state.
///
/// Only one request can be outstanding; while `Loading` the trigger is
/// disabled and further submits are rejected.
#[derive(Debug, Clone, Default)]
pub struct Session {
    language: Language,
    state: ViewState,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            state: ViewState::Idle,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch UI strings and the language sent with the next request.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn translations(&self) -> &'static Translations {
        translations(self.language)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Start a submission.
    ///
    /// A blank topic moves to `Error` with the localized message and issues
    /// nothing. Otherwise the session enters `Loading` and the request to send
    /// is returned.
    pub fn begin(&mut self, topic: &str) -> Result<AnalysisRequest, SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::Busy);
        }

        let topic = topic.trim();
        if topic.is_empty() {
            self.state = ViewState::Error(self.translations().empty_topic.to_string());
            return Err(SubmitRejected::EmptyTopic);
        }

        self.state = ViewState::Loading;
        Ok(AnalysisRequest::new(topic, self.language))
    }

    /// Apply the outcome of the request started by [`Session::begin`].
    pub fn finish(&mut self, outcome: Result<AnalysisResult, GatewayError>) {
        if !self.is_loading() {
            debug!("Ignoring outcome outside of a loading state");
            return;
        }

        self.state = match outcome {
            Ok(result) => ViewState::Result(ResultView::from_result(result, self.translations())),
            Err(err) if err.message().trim().is_empty() => {
                ViewState::Error(self.translations().error_text.to_string())
            }
            Err(err) => ViewState::Error(err.message().to_string()),
        };
    }

    /// `begin`, send through `gateway`, then `finish`.
    pub async fn submit(&mut self, gateway: &dyn AnalysisGateway, topic: &str) -> &ViewState {
        if let Ok(request) = self.begin(topic) {
            let outcome = gateway.analyze(&request).await;
            self.finish(outcome);
        }
        &self.state
    }
}
