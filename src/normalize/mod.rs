//! Response normalization.
//!
//! The PlanRAG `/ask` endpoint has no fixed response schema. Different
//! backend versions put the answer, the plan behind it and the cited
//! documents under different keys. [`normalize`] probes each output against
//! an ordered table of candidate fields (see [`fields`]) and takes the first
//! one that is present, degrading to fixed fallbacks instead of failing.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use skyscale_copilot::normalize::{normalize, SourceCitation};
//!
//! let response = json!({
//!     "output": "Check the search indexer lag first.",
//!     "plan": "1. look at lag dashboard",
//!     "sources": ["runbook-search-p1"]
//! });
//!
//! let normalized = normalize(&response);
//! assert_eq!(normalized.answer, "Check the search indexer lag first.");
//! assert_eq!(normalized.evidence, "1. look at lag dashboard");
//! assert_eq!(normalized.sources, vec![SourceCitation::titled("runbook-search-p1")]);
//! ```

pub mod fields;
mod types;

pub use types::{NormalizedResponse, SourceCitation};

use serde_json::Value;

use fields::{
    display_text, first_present, label_text, ANSWER_FIELDS, EVIDENCE_CANDIDATES, SNIPPET_FIELDS,
    SOURCE_FIELDS, TITLE_FIELDS, URL_FIELDS,
};

/// Answer used when no answer field is present.
pub const NO_ANSWER: &str = "No answer returned from the copilot.";

/// Title for a list element with no title field.
pub const UNTITLED_SOURCE: &str = "Untitled source";

/// Title for a lone source object with no title field.
pub const SINGLE_SOURCE_TITLE: &str = "Source";

/// Normalize a backend response into answer, evidence and sources.
///
/// Never fails: every output has a fallback.
#[must_use]
pub fn normalize(response: &Value) -> NormalizedResponse {
    NormalizedResponse {
        answer: extract_answer(response),
        evidence: extract_evidence(response),
        sources: extract_sources(response),
    }
}

/// The display answer.
#[must_use]
pub fn extract_answer(response: &Value) -> String {
    first_present(response, &ANSWER_FIELDS).map_or_else(|| NO_ANSWER.to_string(), display_text)
}

/// The evidence text, or an empty string when there is none.
#[must_use]
pub fn extract_evidence(response: &Value) -> String {
    EVIDENCE_CANDIDATES
        .iter()
        .find_map(|candidate| candidate.resolve(response))
        .map_or_else(String::new, |value| display_text(&value))
}

/// The cited documents.
///
/// The first present source field decides, even if it holds an empty list
/// or a shape that yields nothing.
#[must_use]
pub fn extract_sources(response: &Value) -> Vec<SourceCitation> {
    match first_present(response, &SOURCE_FIELDS) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| citation(item, UNTITLED_SOURCE))
            .collect(),
        Some(single @ Value::Object(_)) => vec![citation(single, SINGLE_SOURCE_TITLE)],
        _ => Vec::new(),
    }
}

fn citation(item: &Value, untitled: &str) -> SourceCitation {
    if let Value::String(title) = item {
        return SourceCitation::titled(title.as_str());
    }
    SourceCitation {
        title: first_present(item, &TITLE_FIELDS).map_or_else(|| untitled.to_string(), label_text),
        url: first_present(item, &URL_FIELDS).map(label_text),
        snippet: first_present(item, &SNIPPET_FIELDS).map(label_text),
    }
}
