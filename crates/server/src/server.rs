//! Server lifecycle: bind, serve, graceful shutdown.

use std::net::SocketAddr;

use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use depviz_core::ScanConfig;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// DepViz HTTP server.
pub struct Server {
    config: ServerConfig,
    scan: ScanConfig,
}

impl Server {
    /// Create a server with the default scan rules.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            scan: ScanConfig::default(),
        }
    }

    /// Override the scan rules applied to analysis requests.
    pub fn with_scan_config(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse::<SocketAddr>()
            .map_err(|err| ApiError::internal(format!("invalid listen address: {err}")))
    }

    /// Bind and serve until Ctrl+C.
    pub async fn start(self) -> Result<(), ApiError> {
        let addr = self.socket_addr()?;

        let state = AppState::new(self.scan);
        let app = create_router()
            .with_state(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| ApiError::internal(format!("failed to bind {addr}: {err}")))?;

        info!("listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| ApiError::internal(format!("server error: {err}")))
    }
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {err}");
        return;
    }
    info!("shutdown signal received");
}
