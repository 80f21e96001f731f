//! Terminal painting of a [`View`].

use colored::{ColoredString, Colorize};

use crate::markdown::{Line, Span};
use crate::templates::{QuickActionKind, QUICK_ACTIONS};
use crate::view::{Body, CitationEntry, View};

const IDLE_HINT: &str = "Ask a policy question, or pick a quick action with /t <key>.";
const PENDING_TEXT: &str = "Searching...";
const NO_CITATIONS: &str = "No citations returned.";

/// Renders views as terminal text, with or without ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Paint a full view; lines end with `\n`.
    pub fn view(&self, view: &View) -> String {
        let mut out = String::new();

        if let Some(notice) = view.notice {
            out.push_str(&self.paint(notice, |s| s.yellow().bold()));
            out.push('\n');
        }

        match &view.body {
            Body::Idle => {
                if view.notice.is_none() {
                    out.push_str(&self.paint(IDLE_HINT, |s| s.dimmed()));
                    out.push('\n');
                }
            }
            Body::Pending => {
                out.push_str(&self.paint(PENDING_TEXT, |s| s.cyan().bold()));
                if !view.question.trim().is_empty() {
                    out.push(' ');
                    out.push_str(&self.paint(view.question.trim(), |s| s.dimmed()));
                }
                out.push('\n');
            }
            Body::Answer { answer, citations } => {
                out.push_str(&self.paint("Answer", |s| s.bold().underline()));
                out.push('\n');
                for line in answer {
                    out.push_str(&self.line(line));
                    out.push('\n');
                }
                out.push('\n');
                out.push_str(&self.paint("Citations", |s| s.bold()));
                out.push('\n');
                out.push_str(&self.citations(citations));
            }
            Body::Error(message) => {
                out.push_str(&self.paint("Error", |s| s.red().bold()));
                out.push('\n');
                out.push_str(&self.paint(message, |s| s.red()));
                out.push('\n');
            }
        }

        out
    }

    /// Paint the citation list, or the explicit empty indicator.
    pub fn citations(&self, entries: &[CitationEntry]) -> String {
        if entries.is_empty() {
            return format!("  {}\n", self.paint(NO_CITATIONS, |s| s.dimmed().italic()));
        }

        let mut out = String::new();
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(&format!(
                "  {}. {}  {}  {}\n",
                i + 1,
                self.paint(&entry.source, |s| s.bold()),
                self.paint(&format!("Page {}", entry.page), |s| s.normal()),
                self.paint(&entry.chunk_id, |s| s.dimmed()),
            ));
        }
        out
    }

    /// Paint the quick-action catalogue.
    pub fn quick_actions(&self) -> String {
        let mut out = String::new();
        for (kind, title) in [
            (QuickActionKind::Chip, "Topics"),
            (QuickActionKind::Card, "Quick actions"),
        ] {
            out.push_str(&self.paint(title, |s| s.bold()));
            out.push('\n');
            for (i, action) in QUICK_ACTIONS.iter().enumerate() {
                if action.kind != kind {
                    continue;
                }
                out.push_str(&format!(
                    "  {}. {:<11} {} - {}\n",
                    i + 1,
                    self.paint(action.key, |s| s.cyan()),
                    self.paint(action.label, |s| s.bold()),
                    action.description,
                ));
            }
        }
        out
    }

    /// One warning line, e.g. for an unknown command.
    pub fn warning(&self, text: &str) -> String {
        format!("{}\n", self.paint(text, |s| s.yellow()))
    }

    fn line(&self, line: &Line) -> String {
        line.spans.iter().map(|span| self.span(span)).collect()
    }

    fn span(&self, span: &Span) -> String {
        let style = span.style;
        self.paint(&span.text, |mut s| {
            if style.strong || style.heading {
                s = s.bold();
            }
            if style.emphasis {
                s = s.italic();
            }
            if style.code {
                s = s.cyan();
            }
            if style.link {
                s = s.blue().underline();
            }
            s
        })
    }

    fn paint(&self, text: &str, style: impl FnOnce(ColoredString) -> ColoredString) -> String {
        if self.color {
            style(text.normal()).to_string()
        } else {
            text.to_string()
        }
    }
}
