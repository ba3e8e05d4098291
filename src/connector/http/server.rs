use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::Result;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers;
use super::AppState;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory served for every path other than `/generate`.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Create the application router.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/generate", post(handlers::generate))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.addr()` and serve until Ctrl-C.
pub async fn run_server(state: AppState, config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    serve(listener, state, &config.static_dir).await
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState, static_dir: &Path) -> Result<()> {
    if !static_dir.is_dir() {
        warn!("Static directory {} does not exist", static_dir.display());
    }

    let app = create_router(state, static_dir);
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
