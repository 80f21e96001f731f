use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures the gateway answers on its own.
///
/// Neither variant puts its detail on the wire: the detail is logged and the
/// caller gets the bare status text.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Inbound body was not JSON.
    #[error("inbound body is not valid JSON")]
    InvalidBody(#[source] serde_json::Error),

    /// The outbound call to the answering service did not complete.
    #[error("answering service unreachable")]
    Upstream(#[source] reqwest::Error),
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            GatewayError::InvalidBody(e) => tracing::warn!(error = %e, "{}", self),
            GatewayError::Upstream(e) => tracing::error!(error = %e, "{}", self),
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            reason,
        )
            .into_response()
    }
}
