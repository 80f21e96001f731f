//! In-memory transport for exercising the console without a network.

use std::sync::Mutex;
use std::time::Duration;

use policyqa_client::{AskRequest, AskTransport, TransportReply};
use policyqa_core::AppResult;

/// Records every request and replays a canned result.
pub(crate) struct ScriptedTransport {
    reply: Box<dyn Fn() -> AppResult<TransportReply> + Send + Sync>,
    delay: Option<Duration>,
    seen: Mutex<Vec<AskRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new(
        reply: impl Fn() -> AppResult<TransportReply> + Send + Sync + 'static,
    ) -> Self {
        Self {
            reply: Box::new(reply),
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<AskRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AskTransport for ScriptedTransport {
    fn transport_name(&self) -> &str {
        "scripted"
    }

    async fn ask(&self, request: &AskRequest) -> AppResult<TransportReply> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.reply)()
    }
}

/// A transport answering `**Bold**` with one handbook citation.
pub(crate) fn answered() -> ScriptedTransport {
    ScriptedTransport::new(|| {
        Ok(TransportReply::new(
            200,
            r#"{"answer":"**Bold**","citations":[{"source_pdf":"handbook.pdf","page_number":12,"chunk_id":"c1"}]}"#,
        ))
    })
}
