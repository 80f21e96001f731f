//! Line-at-a-time console driving.
//!
//! [`Console`] takes one input line or one finished ask at a time and returns
//! the text to print. Asks run on spawned tasks and come back through the
//! receiver returned by [`Console::new`], so the caller can keep reading
//! input while one is pending. Must be used inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;

use policyqa_client::AskTransport;
use tokio::sync::mpsc;

use crate::driver::{dispatch, Completion};
use crate::input::{ConsoleInput, HELP};
use crate::paint::Painter;
use crate::session::{AskSession, Submission};
use crate::state::{Applied, Ticket};
use crate::templates::find;
use crate::view::View;

pub type CompletionTx = mpsc::UnboundedSender<(Ticket, Completion)>;
pub type CompletionRx = mpsc::UnboundedReceiver<(Ticket, Completion)>;

/// What to do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print this and keep reading.
    Print(String),
    Quit,
}

pub struct Console {
    session: AskSession,
    transport: Arc<dyn AskTransport>,
    timeout: Option<Duration>,
    painter: Painter,
    tx: CompletionTx,
}

impl Console {
    pub fn new(
        transport: Arc<dyn AskTransport>,
        timeout: Option<Duration>,
        painter: Painter,
    ) -> (Self, CompletionRx) {
        let (tx, rx) = mpsc::unbounded_channel();
        let console = Self {
            session: AskSession::new(),
            transport,
            timeout,
            painter,
            tx,
        };
        (console, rx)
    }

    pub fn session(&self) -> &AskSession {
        &self.session
    }

    /// The current view, painted.
    pub fn render(&self) -> String {
        self.painter.view(&View::of(&self.session))
    }

    /// Type `question` and submit it.
    pub fn ask(&mut self, question: impl Into<String>) -> String {
        let submission = self.session.submit_question(question);
        self.launch(submission);
        self.render()
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let output = match ConsoleInput::parse(line) {
            ConsoleInput::Quit => return Step::Quit,
            ConsoleInput::Help => HELP.to_string(),
            ConsoleInput::Templates => self.painter.quick_actions(),
            ConsoleInput::Reset => {
                self.session.reset();
                self.render()
            }
            ConsoleInput::Ask => {
                let submission = self.session.submit();
                self.launch(submission);
                self.render()
            }
            ConsoleInput::Question(text) => self.ask(text),
            ConsoleInput::Template(query) => match find(&query) {
                Some(action) => {
                    let submission = self.session.run_template(action);
                    self.launch(submission);
                    self.render()
                }
                None => self.painter.warning(&format!(
                    "Unknown quick action '{}'. Try /templates.",
                    query
                )),
            },
            ConsoleInput::Unknown(command) => self.painter.warning(&format!(
                "Unknown command {}. Type /help for commands.",
                command
            )),
        };
        Step::Print(output)
    }

    /// Apply a finished ask; `None` when it was stale and nothing changed.
    pub fn handle_completion(&mut self, ticket: Ticket, completion: Completion) -> Option<String> {
        match self.session.finish(ticket, completion) {
            Applied::Changed => Some(self.render()),
            Applied::Busy | Applied::Stale => None,
        }
    }

    fn launch(&self, submission: Submission) {
        let Submission::Started { ticket, request } = submission else {
            return;
        };

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let timeout = self.timeout;
        tokio::spawn(async move {
            let completion = dispatch(transport.as_ref(), &request, timeout).await;
            if tx.send((ticket, completion)).is_err() {
                tracing::debug!(%ticket, "Console closed before the answer arrived");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestState;
    use crate::testing::answered;

    fn printed(step: Step) -> String {
        match step {
            Step::Print(text) => text,
            Step::Quit => panic!("console quit unexpectedly"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_line_while_pending_is_refused() {
        let transport = Arc::new(answered().delayed(Duration::from_secs(5)));
        let (mut console, mut rx) = Console::new(transport.clone(), None, Painter::new(false));

        printed(console.handle_line("first"));
        let out = printed(console.handle_line("second"));
        assert!(out.contains("Still answering the previous question."));
        assert!(out.contains("Searching... first"));
        assert_eq!(console.session().question(), "first");

        let (ticket, completion) = rx.recv().await.unwrap();
        let out = console.handle_completion(ticket, completion).unwrap();
        assert!(out.contains("handbook.pdf  Page 12  c1"));

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].question, "first");
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_after_reset_is_dropped() {
        let transport = Arc::new(answered().delayed(Duration::from_secs(5)));
        let (mut console, mut rx) = Console::new(transport, None, Painter::new(false));

        printed(console.handle_line("first"));
        printed(console.handle_line("/reset"));

        let (ticket, completion) = rx.recv().await.unwrap();
        assert_eq!(console.handle_completion(ticket, completion), None);
        assert_eq!(console.session().state(), &RequestState::Idle);
        assert_eq!(console.session().question(), "");
    }

    #[tokio::test]
    async fn test_blank_line_warns_without_sending() {
        let transport = Arc::new(answered());
        let (mut console, mut rx) = Console::new(transport.clone(), None, Painter::new(false));

        let out = printed(console.handle_line("   "));
        assert_eq!(out, "Please enter a question.\n");

        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_template_line_submits_preset() {
        let transport = Arc::new(answered());
        let (mut console, mut rx) = Console::new(transport.clone(), None, Painter::new(false));

        printed(console.handle_line("/t integrity"));
        let (ticket, completion) = rx.recv().await.unwrap();
        assert!(console.handle_completion(ticket, completion).is_some());

        assert_eq!(
            transport.calls()[0].question,
            "What is the plagiarism policy and consequences?"
        );
    }

    #[tokio::test]
    async fn test_unknown_inputs_and_quit() {
        let (mut console, _rx) = Console::new(Arc::new(answered()), None, Painter::new(false));

        assert!(printed(console.handle_line("/t 99")).contains("Unknown quick action '99'"));
        assert!(printed(console.handle_line("/bogus")).contains("Unknown command /bogus"));
        assert!(printed(console.handle_line("/help")).contains("/templates"));
        assert_eq!(console.handle_line("/quit"), Step::Quit);
        assert_eq!(console.session().state(), &RequestState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_is_reported() {
        let transport = Arc::new(answered().delayed(Duration::from_secs(60)));
        let (mut console, mut rx) =
            Console::new(transport, Some(Duration::from_secs(2)), Painter::new(false));

        printed(console.handle_line("slow question"));
        let (ticket, completion) = rx.recv().await.unwrap();
        let out = console.handle_completion(ticket, completion).unwrap();
        assert!(out.contains("Request timed out after 2s"));
    }
}
