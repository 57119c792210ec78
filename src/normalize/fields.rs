//! Candidate field tables and value probing.
//!
//! A field counts as present when its value is truthy: not missing, not
//! `null`, not `false`, not zero and not the empty string. Arrays and objects
//! are always present, even when empty.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Fields probed for the answer, in priority order.
pub const ANSWER_FIELDS: [&str; 4] = ["answer", "response", "output", "message"];

/// Fields probed for the source list, in priority order.
pub const SOURCE_FIELDS: [&str; 4] = ["sources", "source_docs", "documents", "context_docs"];

/// Per-citation title fields.
pub const TITLE_FIELDS: [&str; 3] = ["title", "name", "id"];

/// Per-citation url fields.
pub const URL_FIELDS: [&str; 3] = ["url", "link", "href"];

/// Per-citation snippet fields.
pub const SNIPPET_FIELDS: [&str; 3] = ["snippet", "preview", "summary"];

/// One step of the evidence search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceCandidate {
    /// A single top-level field.
    Field(&'static str),
    /// `{source, plan_trace}` built from whichever of the two is defined.
    SourceWithPlanTrace,
}

/// Evidence search order.
pub const EVIDENCE_CANDIDATES: [EvidenceCandidate; 6] = [
    EvidenceCandidate::Field("evidence"),
    EvidenceCandidate::SourceWithPlanTrace,
    EvidenceCandidate::Field("plan"),
    EvidenceCandidate::Field("rationale"),
    EvidenceCandidate::Field("debug"),
    EvidenceCandidate::Field("context"),
];

impl EvidenceCandidate {
    /// Resolve this candidate against a response.
    #[must_use]
    pub fn resolve(self, response: &Value) -> Option<Cow<'_, Value>> {
        match self {
            Self::Field(name) => field(response, name).map(Cow::Borrowed),
            Self::SourceWithPlanTrace => {
                if field(response, "source").is_none() && field(response, "plan_trace").is_none() {
                    return None;
                }
                // Keys that are defined are kept even when falsy.
                let mut synthesized = Map::new();
                for key in ["source", "plan_trace"] {
                    if let Some(value) = response.get(key) {
                        synthesized.insert(key.to_string(), value.clone());
                    }
                }
                Some(Cow::Owned(Value::Object(synthesized)))
            }
        }
    }
}

/// Truthiness test applied to every probed field.
#[must_use]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a field, treating falsy values as absent. Non-objects have no fields.
#[must_use]
pub fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get(name).filter(|v| is_present(v))
}

/// First present field among `names`.
#[must_use]
pub fn first_present<'a>(value: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| field(value, name))
}

/// Largest integer a backend float can carry without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Strings verbatim, everything else as 2-space indented JSON.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => {
            let other = integral_floats(other);
            serde_json::to_string_pretty(&other).unwrap_or_else(|_| other.to_string())
        }
    }
}

/// Strings verbatim, everything else as compact JSON (`42`, `true`).
#[must_use]
pub fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => integral_floats(other).to_string(),
    }
}

/// Copy of `value` with whole-number floats written as integers (`1.0` -> `1`).
#[allow(clippy::cast_possible_truncation)]
fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(number) if number.is_f64() => number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER)
            .map_or_else(|| value.clone(), |n| Value::from(n as i64)),
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), integral_floats(item)))
                .collect(),
        ),
        other => other.clone(),
    }
}
