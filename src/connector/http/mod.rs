//! Axum server exposing `POST /generate` and the static web front-end.

mod error;
mod handlers;
mod server;
mod state;

pub use error::ApiError;
pub use server::{create_router, run_server, serve, ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_DIR};
pub use state::AppState;
