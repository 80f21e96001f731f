//! Running one submission against a transport.

use std::time::Duration;

use policyqa_client::{AskRequest, AskTransport, TransportReply};
use policyqa_core::AppResult;

use crate::session::{AskSession, Submission};
use crate::state::Applied;

/// How the round trip for one ticket ended.
#[derive(Debug)]
pub enum Completion {
    /// The transport finished (with a reply or a transport error).
    Reply(AppResult<TransportReply>),
    /// The caller-side timeout expired first; the call was dropped.
    TimedOut(Duration),
}

/// Send one request, optionally bounded by `timeout`.
pub async fn dispatch(
    transport: &dyn AskTransport,
    request: &AskRequest,
    timeout: Option<Duration>,
) -> Completion {
    tracing::debug!(transport = transport.transport_name(), "Dispatching ask");

    let call = transport.ask(request);
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => Completion::Reply(result),
            Err(_) => {
                tracing::warn!(timeout_secs = limit.as_secs(), "Ask timed out");
                Completion::TimedOut(limit)
            }
        },
        None => Completion::Reply(call.await),
    }
}

/// Drive a submission to completion when it started a call.
///
/// Returns `None` when the submission was refused and nothing was sent.
pub async fn run_submission(
    session: &mut AskSession,
    submission: Submission,
    transport: &dyn AskTransport,
    timeout: Option<Duration>,
) -> Option<Applied> {
    match submission {
        Submission::Started { ticket, request } => {
            let completion = dispatch(transport, &request, timeout).await;
            Some(session.finish(ticket, completion))
        }
        Submission::Invalid | Submission::Busy => None,
    }
}
