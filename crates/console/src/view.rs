//! What the console shows for a session, independent of the terminal.

use std::collections::HashSet;

use policyqa_client::{AskResponse, Citation};

use crate::markdown::{render_markdown, Line};
use crate::session::AskSession;
use crate::state::RequestState;

/// One rendered citation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationEntry {
    /// Rendering key (the chunk id)
    pub key: String,
    pub source: String,
    /// Page reference as sent
    pub page: String,
    pub chunk_id: String,
}

impl From<&Citation> for CitationEntry {
    fn from(citation: &Citation) -> Self {
        Self {
            key: citation.chunk_id.clone(),
            source: citation.source_pdf.clone(),
            page: citation.page_number.to_string(),
            chunk_id: citation.chunk_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No submission on screen.
    Idle,
    /// Waiting for the answer.
    Pending,
    /// Answer lines plus citations; an empty list means none were returned.
    Answer {
        answer: Vec<Line>,
        citations: Vec<CitationEntry>,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub question: String,
    pub notice: Option<&'static str>,
    pub body: Body,
}

impl View {
    pub fn of(session: &AskSession) -> Self {
        let body = match session.state() {
            RequestState::Idle => Body::Idle,
            RequestState::Pending(_) => Body::Pending,
            RequestState::Settled(response) => answer_body(response),
            RequestState::Failed(message) => Body::Error(message.clone()),
        };

        Self {
            question: session.question().to_string(),
            notice: session.notice().map(|n| n.message()),
            body,
        }
    }
}

fn answer_body(response: &AskResponse) -> Body {
    Body::Answer {
        answer: render_markdown(&response.answer),
        citations: citation_entries(&response.citations),
    }
}

/// Citation rows in backend order, one per chunk id (first occurrence wins).
pub fn citation_entries(citations: &[Citation]) -> Vec<CitationEntry> {
    let mut seen = HashSet::new();
    citations
        .iter()
        .filter(|c| seen.insert(c.chunk_id.as_str()))
        .map(CitationEntry::from)
        .collect()
}
