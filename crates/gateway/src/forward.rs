//! `POST /api/ask`: relays one question to the answering service.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::de::IgnoredAny;

use crate::{error::GatewayError, GatewayState};

/// Content type used when the answering service does not send one.
const FALLBACK_CONTENT_TYPE: &str = "text/plain";

/// Handler: POST /api/ask
///
/// The body is checked to be JSON and forwarded byte-for-byte; its shape is
/// the answering service's business. Status, content type and body text of
/// the upstream response are returned unchanged, the body as raw bytes.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What are the attendance requirements?"}'
/// ```
pub async fn forward_ask(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    serde_json::from_slice::<IgnoredAny>(&body).map_err(GatewayError::InvalidBody)?;

    let url = state.config.ask_url();
    tracing::debug!(%url, bytes = body.len(), "Forwarding question");

    let upstream = state
        .client
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(GatewayError::Upstream)?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(FALLBACK_CONTENT_TYPE));

    let body = upstream.bytes().await.map_err(GatewayError::Upstream)?;

    tracing::info!(
        status = status.as_u16(),
        bytes = body.len(),
        "Answering service replied"
    );

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}
