//! Gateway transport.
//!
//! Posts `{ "question": ... }` to `{base_url}/api/ask` and returns the
//! response status, content type and body text unchanged.

use policyqa_core::{AppError, AppResult};
use reqwest::header::CONTENT_TYPE;

use crate::client::{AskTransport, TransportReply};
use crate::types::AskRequest;

/// Path of the gateway's ask endpoint.
pub const ASK_PATH: &str = "/api/ask";

/// HTTP client for the ask gateway.
pub struct GatewayClient {
    /// Base URL of the gateway (without the `/api/ask` suffix)
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GatewayClient {
    /// Create a client for a gateway base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Full URL of the ask endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, ASK_PATH)
    }
}

#[async_trait::async_trait]
impl AskTransport for GatewayClient {
    fn transport_name(&self) -> &str {
        "gateway"
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<TransportReply> {
        let url = self.endpoint();
        tracing::debug!(%url, "Posting question to gateway");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Transport(describe_send_error(&e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read gateway response: {}", e)))?;

        tracing::debug!(status, bytes = body.len(), "Gateway replied");

        Ok(TransportReply {
            status,
            content_type,
            body,
        })
    }
}

/// Turn a reqwest send error into a short user-facing message.
fn describe_send_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        "Could not connect to the gateway".to_string()
    } else if err.is_timeout() {
        "The gateway did not respond in time".to_string()
    } else {
        format!("Failed to reach the gateway: {}", err)
    }
}
