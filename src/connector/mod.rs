//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Generation (Gemini `generateContent`, plus a deterministic mock)
//! - Credentials (environment variable with a key-file fallback)
//! - HTTP (the axum server for `POST /generate` and a client for it)
//! - CLI wiring (container, router, controllers)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
pub use http::{create_router, run_server, serve, AppState, ServerConfig, DEFAULT_PORT, DEFAULT_STATIC_DIR};
