//! Ask console: the interactive side of PolicyQA.
//!
//! The console owns one [`AskSession`] per user. A session holds the
//! question field and a [`RequestState`] machine
//! (`Idle → Pending → Settled | Failed`), and turns transport replies into
//! settled answers or display-ready error messages. Rendering goes through a
//! plain [`View`] model so the contract can be checked without a terminal;
//! [`Painter`] turns a view into (optionally colored) terminal text.

pub mod driver;
pub mod input;
pub mod markdown;
pub mod outcome;
pub mod paint;
pub mod repl;
pub mod session;
pub mod state;
pub mod templates;
pub mod view;

#[cfg(test)]
mod testing;

pub use driver::{dispatch, run_submission, Completion};
pub use input::ConsoleInput;
pub use outcome::{interpret, Outcome, GENERIC_FAILURE};
pub use paint::Painter;
pub use repl::{Console, CompletionRx, Step};
pub use session::{AskSession, Notice, Submission};
pub use state::{Applied, Event, RequestState, Ticket};
pub use templates::{QuickAction, QuickActionKind, QUICK_ACTIONS};
pub use view::{Body, CitationEntry, View};
