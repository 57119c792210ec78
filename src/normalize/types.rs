//! Normalized copilot output types.

use serde::{Deserialize, Serialize};

/// A document the backend cited for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCitation {
    /// Display title.
    pub title: String,
    /// Link to the document, if the backend supplied one.
    pub url: Option<String>,
    /// Short excerpt or summary.
    pub snippet: Option<String>,
}

impl SourceCitation {
    /// Create a citation carrying only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            snippet: None,
        }
    }

    /// Set the url.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the snippet.
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Text to show for the citation: the title, or the url when the title is empty.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.url {
            Some(url) if self.title.is_empty() => url,
            _ => &self.title,
        }
    }
}

/// Display-ready view of a question-answering response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResponse {
    /// The answer text.
    pub answer: String,
    /// Reasoning or plan trace; empty when the backend sent none.
    pub evidence: String,
    /// Cited documents.
    pub sources: Vec<SourceCitation>,
}
