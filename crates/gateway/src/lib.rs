//! Ask gateway: a stateless forwarding endpoint in front of the answering
//! service.
//!
//! The gateway exposes `POST /api/ask`, relays the JSON body to
//! `{api_base}/ask` and returns the upstream status, content type and body
//! text untouched. It interprets nothing and holds no per-request state.

use std::{net::SocketAddr, sync::Arc};

use axum::{routing::post, Router};
use policyqa_core::{AppConfig, AppError, AppResult};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;

pub mod error;
pub mod forward;

pub use error::GatewayError;

/// Gateway configuration, injected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base address of the answering service, e.g. "http://localhost:8001"
    pub api_base: String,
}

impl GatewayConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Upstream URL every question is posted to.
    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.api_base.trim_end_matches('/'))
    }
}

impl From<&AppConfig> for GatewayConfig {
    fn from(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }
}

/// Shared state for the gateway handler.
pub struct GatewayState {
    pub config: GatewayConfig,
    pub client: reqwest::Client,
}

/// Build the gateway router.
pub fn router(config: GatewayConfig) -> Router {
    let state = Arc::new(GatewayState {
        config,
        client: reqwest::Client::new(),
    });

    Router::new()
        .route("/api/ask", post(forward::forward_ask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(config: GatewayConfig, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Gateway(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(%addr, upstream = %config.ask_url(), "Gateway listening");

    serve_on(listener, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, config: GatewayConfig, shutdown: F) -> AppResult<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(config))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Gateway(format!("Server error: {}", e)))?;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_url() {
        assert_eq!(
            GatewayConfig::new("http://localhost:8001").ask_url(),
            "http://localhost:8001/ask"
        );
        assert_eq!(
            GatewayConfig::new("https://rag.example.edu/v1/").ask_url(),
            "https://rag.example.edu/v1/ask"
        );
    }

    #[test]
    fn test_from_app_config() {
        let app = AppConfig::default();
        assert_eq!(GatewayConfig::from(&app).api_base, "http://localhost:8001");
    }
}
