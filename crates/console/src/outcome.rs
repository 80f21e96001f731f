//! Folding a finished round trip into an answer or an error message.

use policyqa_client::{AskResponse, TransportReply};
use policyqa_core::AppResult;

/// Shown when a failure carries no text of its own.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Result of one completed ask, ready to settle the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answered(AskResponse),
    Failed(String),
}

/// Interpret the transport result of one ask.
///
/// - transport failure: the error's message
/// - non-2xx: the raw body text
/// - 2xx that is not an `{answer, citations}` payload: the raw body text
///
/// Any of those falls back to [`GENERIC_FAILURE`] when blank.
pub fn interpret(result: AppResult<TransportReply>) -> Outcome {
    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("Ask did not complete: {}", e);
            return Outcome::Failed(or_generic(e.to_string()));
        }
    };

    if !reply.is_success() {
        tracing::warn!(status = reply.status, "Ask returned an error status");
        return Outcome::Failed(or_generic(reply.body));
    }

    match AskResponse::from_body(&reply.body) {
        Ok(response) => Outcome::Answered(response),
        Err(e) => {
            tracing::warn!(
                status = reply.status,
                content_type = reply.content_type.as_deref().unwrap_or("none"),
                "Malformed answer payload: {}",
                e
            );
            Outcome::Failed(or_generic(reply.body))
        }
    }
}

fn or_generic(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use policyqa_client::Citation;
    use policyqa_core::AppError;

    #[test]
    fn test_success_payload_is_answered() {
        let reply = TransportReply::new(
            200,
            r#"{"answer":"Yes.","citations":[{"source_pdf":"a.pdf","page_number":3,"chunk_id":"c9"}]}"#,
        );

        let outcome = interpret(Ok(reply));
        assert_eq!(
            outcome,
            Outcome::Answered(AskResponse {
                answer: "Yes.".to_string(),
                citations: vec![Citation::new("a.pdf", 3, "c9")],
            })
        );
    }

    #[test]
    fn test_error_status_surfaces_raw_body() {
        let reply = TransportReply::new(400, r#"{"detail":"Question is required"}"#);
        assert_eq!(
            interpret(Ok(reply)),
            Outcome::Failed(r#"{"detail":"Question is required"}"#.to_string())
        );
    }

    #[test]
    fn test_error_status_with_blank_body_uses_fallback() {
        assert_eq!(
            interpret(Ok(TransportReply::new(500, "  \n"))),
            Outcome::Failed(GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_malformed_success_is_failure() {
        assert_eq!(
            interpret(Ok(TransportReply::new(200, r#"{"answer":null}"#))),
            Outcome::Failed(r#"{"answer":null}"#.to_string())
        );
        assert_eq!(
            interpret(Ok(TransportReply::new(200, ""))),
            Outcome::Failed(GENERIC_FAILURE.to_string())
        );
    }

    #[test]
    fn test_html_success_page_shows_raw_text() {
        let reply = TransportReply::new(200, "<html>maintenance</html>")
            .with_content_type("text/html; charset=utf-8");
        assert_eq!(
            interpret(Ok(reply)),
            Outcome::Failed("<html>maintenance</html>".to_string())
        );
    }

    #[test]
    fn test_transport_error_uses_its_message() {
        let outcome = interpret(Err(AppError::Transport(
            "Could not connect to the gateway".to_string(),
        )));
        match outcome {
            Outcome::Failed(message) => {
                assert!(message.contains("Could not connect to the gateway"))
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_transport_error_uses_fallback() {
        assert_eq!(
            interpret(Err(AppError::Other(String::new()))),
            Outcome::Failed(GENERIC_FAILURE.to_string())
        );
    }
}
