//! One user's ask session: the question field plus the lifecycle.

use std::time::Duration;

use policyqa_client::{AskRequest, TransportReply};
use policyqa_core::AppResult;

use crate::driver::Completion;
use crate::outcome::interpret;
use crate::state::{Applied, Event, RequestState, Ticket};
use crate::templates::QuickAction;

/// Inline notices; neither one touches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The submitted question was blank.
    EmptyQuestion,
    /// A submission arrived while an ask is in flight.
    Busy,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyQuestion => "Please enter a question.",
            Self::Busy => "Still answering the previous question.",
        }
    }
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The session is pending; send `request` and report back with `ticket`.
    Started { ticket: Ticket, request: AskRequest },
    /// Refused by validation; no call is made.
    Invalid,
    /// Refused because an ask is already pending.
    Busy,
}

#[derive(Debug, Default)]
pub struct AskSession {
    question: String,
    state: RequestState,
    notice: Option<Notice>,
    next_ticket: u64,
}

impl AskSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Replace the question field (typing). Does not submit.
    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Submit whatever is in the question field.
    pub fn submit(&mut self) -> Submission {
        let text = self.question.clone();
        self.submit_text(&text)
    }

    /// Type `text` into the field and submit it.
    ///
    /// While pending the field is left alone and the submission is refused.
    pub fn submit_question(&mut self, text: impl Into<String>) -> Submission {
        if self.is_pending() {
            return self.refuse_busy();
        }
        self.question = text.into();
        self.submit()
    }

    /// Fill the field with a preset and submit exactly that preset.
    ///
    /// While pending the field is left alone, so the displayed question keeps
    /// matching the one in flight.
    pub fn run_template(&mut self, action: &QuickAction) -> Submission {
        if self.is_pending() {
            return self.refuse_busy();
        }
        self.question = action.question.to_string();
        self.submit_text(action.question)
    }

    fn submit_text(&mut self, text: &str) -> Submission {
        if self.is_pending() {
            return self.refuse_busy();
        }

        let question = text.trim();
        if question.is_empty() {
            self.state.apply(Event::Refuse);
            self.notice = Some(Notice::EmptyQuestion);
            tracing::debug!("Refused blank question");
            return Submission::Invalid;
        }

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.state.apply(Event::Submit(ticket));
        self.notice = None;
        tracing::info!(%ticket, "Submitting question");

        Submission::Started {
            ticket,
            request: AskRequest::new(question),
        }
    }

    fn refuse_busy(&mut self) -> Submission {
        self.notice = Some(Notice::Busy);
        tracing::debug!("Refused submission while pending");
        Submission::Busy
    }

    /// Settle `ticket` with the transport result.
    pub fn complete(&mut self, ticket: Ticket, result: AppResult<TransportReply>) -> Applied {
        self.settle(Event::Resolve(ticket, interpret(result)))
    }

    /// Fail `ticket` because the caller-side timeout expired.
    pub fn time_out(&mut self, ticket: Ticket, after: Duration) -> Applied {
        self.settle(Event::TimedOut(ticket, after))
    }

    /// Apply whatever the driver produced for `ticket`.
    pub fn finish(&mut self, ticket: Ticket, completion: Completion) -> Applied {
        match completion {
            Completion::Reply(result) => self.complete(ticket, result),
            Completion::TimedOut(after) => self.time_out(ticket, after),
        }
    }

    fn settle(&mut self, event: Event) -> Applied {
        let applied = self.state.apply(event);
        match applied {
            Applied::Changed => {
                self.notice = None;
            }
            Applied::Stale => tracing::debug!("Discarded completion for a stale ticket"),
            Applied::Busy => {}
        }
        applied
    }

    /// New question: clear the field, the result and the error.
    pub fn reset(&mut self) {
        self.question.clear();
        self.notice = None;
        self.state.apply(Event::Reset);
    }
}
