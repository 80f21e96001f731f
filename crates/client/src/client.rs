//! Transport abstraction for reaching the gateway.
//!
//! The console never talks HTTP directly; it hands an [`AskRequest`] to an
//! [`AskTransport`] and interprets the raw [`TransportReply`] itself, so the
//! lifecycle can be exercised against an in-memory transport in tests.

use policyqa_core::AppResult;

use crate::types::AskRequest;

/// Raw outcome of one round trip that completed at the HTTP level.
///
/// The body is kept as text: error responses may be plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    /// HTTP status code
    pub status: u16,

    /// Content type as reported by the server, if any
    pub content_type: Option<String>,

    /// Full response body as text
    pub body: String,
}

impl TransportReply {
    /// Create a reply without a content type.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// Attach a content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for ask transports.
///
/// `Err` means the call did not complete (DNS failure, connection refused,
/// broken connection). Any HTTP status, including 4xx/5xx, is an `Ok` reply.
#[async_trait::async_trait]
pub trait AskTransport: Send + Sync {
    /// Short name used in logs (e.g., "gateway").
    fn transport_name(&self) -> &str;

    /// Send one question and wait for the full reply.
    async fn ask(&self, request: &AskRequest) -> AppResult<TransportReply>;
}
