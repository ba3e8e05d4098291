mod analysis_gateway;
mod generation_client;

pub use analysis_gateway::*;
pub use generation_client::*;
