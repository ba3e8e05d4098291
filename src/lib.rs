pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;
pub mod presentation;

pub use cli::Commands;

pub use application::{
    AnalysisGateway, AnalyzeTopicUseCase, GatewayError, GenerationClient,
};

pub use connector::{
    create_router, run_server, serve, AppState, Container, ContainerConfig, GeminiClient,
    HttpAnalysisGateway, MockGenerationClient, ServerConfig,
};

pub use domain::{
    parse_analysis, strip_code_fences, AnalysisRequest, AnalysisResult, DomainError, Language,
    ModelAnalysis, PriceComparison,
};

pub use presentation::{render_session, Session, SubmitRejected, ViewState};
