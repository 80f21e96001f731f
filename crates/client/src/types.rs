//! Answer payload types.
//!
//! These mirror the JSON shapes exchanged with the answering service:
//! `{ "question": ... }` going out, `{ "answer": ..., "citations": [...] }`
//! coming back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Question payload sent through the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Natural language question, exactly as submitted
    pub question: String,
}

impl AskRequest {
    /// Create a new ask request.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// Page reference of a citation.
///
/// The backend may send a number (`12`) or free text (`"12-14"`, `"N/A"`).
/// It is display text only and is never parsed into a page index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PageRef {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for PageRef {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A pointer to the source passage supporting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Source document identifier (e.g., "handbook.pdf")
    pub source_pdf: String,

    /// Page reference, opaque display text
    pub page_number: PageRef,

    /// Stable chunk identity; rendering and dedup key
    pub chunk_id: String,
}

impl Citation {
    /// Create a citation.
    pub fn new(
        source_pdf: impl Into<String>,
        page_number: impl Into<PageRef>,
        chunk_id: impl Into<String>,
    ) -> Self {
        Self {
            source_pdf: source_pdf.into(),
            page_number: page_number.into(),
            chunk_id: chunk_id.into(),
        }
    }
}

/// Successful answer from the answering service.
///
/// Both fields are required. `citations` may be empty, which means the
/// answer was given without supporting sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Markdown-formatted answer
    pub answer: String,

    /// Citations in backend order
    pub citations: Vec<Citation>,
}

impl AskResponse {
    /// Parse a success body. Any shape mismatch is an error.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Whether the answer came without supporting sources.
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}
