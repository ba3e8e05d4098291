mod credentials;
mod gemini_client;
mod http_analysis_gateway;
mod mock_generation_client;

pub use credentials::*;
pub use gemini_client::*;
pub use http_analysis_gateway::*;
pub use mock_generation_client::*;
