//! Request lifecycle state machine.
//!
//! One ask at a time: `Idle → Pending → Settled | Failed`, with reset back
//! to `Idle` from anywhere. The result and the error live in different
//! variants, so they can never be shown together, and entering `Pending`
//! drops whatever the previous submission left behind.

use std::fmt;
use std::time::Duration;

use policyqa_client::AskResponse;

use crate::outcome::Outcome;

/// Identity of one submission.
///
/// Completions carry the ticket they were issued for; a completion whose
/// ticket is not the pending one is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the current question.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing asked yet, or reset, or the last submission was refused.
    #[default]
    Idle,
    /// Waiting for the answer to this ticket.
    Pending(Ticket),
    /// The last ask was answered.
    Settled(AskResponse),
    /// The last ask failed; display-ready message.
    Failed(String),
}

/// Inputs to [`RequestState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A valid question was submitted under this ticket.
    Submit(Ticket),
    /// A submission was refused by validation.
    Refuse,
    /// The round trip for this ticket finished.
    Resolve(Ticket, Outcome),
    /// The caller-side timeout for this ticket expired.
    TimedOut(Ticket, Duration),
    /// Explicit reset.
    Reset,
}

/// What [`RequestState::apply`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed,
    /// A submission arrived while another ask is pending.
    Busy,
    /// A completion for a ticket that is no longer pending.
    Stale,
}

impl RequestState {
    /// The single transition function.
    pub fn apply(&mut self, event: Event) -> Applied {
        let pending = match self {
            Self::Pending(ticket) => Some(*ticket),
            _ => None,
        };

        match (pending, event) {
            (Some(_), Event::Submit(_) | Event::Refuse) => Applied::Busy,
            (_, Event::Submit(ticket)) => {
                *self = Self::Pending(ticket);
                Applied::Changed
            }
            (_, Event::Refuse | Event::Reset) => {
                *self = Self::Idle;
                Applied::Changed
            }
            (Some(current), Event::Resolve(ticket, outcome)) if current == ticket => {
                *self = match outcome {
                    Outcome::Answered(response) => Self::Settled(response),
                    Outcome::Failed(message) => Self::Failed(message),
                };
                Applied::Changed
            }
            (Some(current), Event::TimedOut(ticket, after)) if current == ticket => {
                *self = Self::Failed(timeout_message(after));
                Applied::Changed
            }
            (_, Event::Resolve(..) | Event::TimedOut(..)) => Applied::Stale,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The settled answer, if any.
    pub fn result(&self) -> Option<&AskResponse> {
        match self {
            Self::Settled(response) => Some(response),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Message for a caller-side timeout.
pub fn timeout_message(after: Duration) -> String {
    format!("Request timed out after {}s", after.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use policyqa_client::Citation;

    fn answer() -> AskResponse {
        AskResponse {
            answer: "Yes.".to_string(),
            citations: vec![Citation::new("a.pdf", 1, "c1")],
        }
    }

    #[test]
    fn test_submit_from_idle_goes_pending() {
        let mut state = RequestState::Idle;
        assert_eq!(state.apply(Event::Submit(Ticket(1))), Applied::Changed);
        assert_eq!(state, RequestState::Pending(Ticket(1)));
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resubmit_clears_result_and_error() {
        let mut state = RequestState::Settled(answer());
        state.apply(Event::Submit(Ticket(2)));
        assert_eq!(state, RequestState::Pending(Ticket(2)));

        let mut state = RequestState::Failed("boom".to_string());
        state.apply(Event::Submit(Ticket(3)));
        assert!(state.error().is_none());
        assert!(state.is_pending());
    }

    #[test]
    fn test_submit_while_pending_is_busy() {
        let mut state = RequestState::Pending(Ticket(1));
        assert_eq!(state.apply(Event::Submit(Ticket(2))), Applied::Busy);
        assert_eq!(state.apply(Event::Refuse), Applied::Busy);
        assert_eq!(state, RequestState::Pending(Ticket(1)));
    }

    #[test]
    fn test_resolve_matching_ticket() {
        let mut state = RequestState::Pending(Ticket(4));
        let applied = state.apply(Event::Resolve(Ticket(4), Outcome::Answered(answer())));
        assert_eq!(applied, Applied::Changed);
        assert_eq!(state.result(), Some(&answer()));

        let mut state = RequestState::Pending(Ticket(5));
        state.apply(Event::Resolve(
            Ticket(5),
            Outcome::Failed("Request failed".to_string()),
        ));
        assert_eq!(state.error(), Some("Request failed"));
    }

    #[test]
    fn test_resolve_stale_ticket_is_ignored() {
        let mut state = RequestState::Pending(Ticket(2));
        let applied = state.apply(Event::Resolve(Ticket(1), Outcome::Answered(answer())));
        assert_eq!(applied, Applied::Stale);
        assert_eq!(state, RequestState::Pending(Ticket(2)));

        let mut state = RequestState::Idle;
        assert_eq!(
            state.apply(Event::Resolve(Ticket(1), Outcome::Answered(answer()))),
            Applied::Stale
        );
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_timeout_fails_then_late_reply_is_dropped() {
        let mut state = RequestState::Pending(Ticket(7));
        state.apply(Event::TimedOut(Ticket(7), Duration::from_secs(30)));
        assert_eq!(state.error(), Some("Request timed out after 30s"));

        let applied = state.apply(Event::Resolve(Ticket(7), Outcome::Answered(answer())));
        assert_eq!(applied, Applied::Stale);
        assert_eq!(state.error(), Some("Request timed out after 30s"));
    }

    #[test]
    fn test_reset_from_any_state() {
        for mut state in [
            RequestState::Idle,
            RequestState::Pending(Ticket(1)),
            RequestState::Settled(answer()),
            RequestState::Failed("x".to_string()),
        ] {
            assert_eq!(state.apply(Event::Reset), Applied::Changed);
            assert_eq!(state, RequestState::Idle);
        }
    }

    #[test]
    fn test_refuse_drops_previous_result() {
        let mut state = RequestState::Settled(answer());
        state.apply(Event::Refuse);
        assert_eq!(state, RequestState::Idle);
    }
}
