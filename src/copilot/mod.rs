//! On-call copilot ask lifecycle.
//!
//! [`Copilot::ask`] sends one question to PlanRAG and always comes back with
//! something displayable: a normalized answer, the backend's error status
//! and body, or a fixed failure message. Errors never escape to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PlanRagError;
use crate::normalize::{normalize, SourceCitation};
use crate::planrag::{AskRequest, Service};
use crate::traits::PlanRagApi;

/// Answer shown when the request fails before a backend status is known.
pub const GENERIC_FAILURE: &str = "Something went wrong while talking to the copilot.";

/// Shown in the evidence panel when the backend sent none.
pub const NO_EVIDENCE: &str = "No explicit evidence was returned by the backend for this answer.";

/// How an ask ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReplyStatus {
    /// The backend answered and the response was normalized.
    Answered,
    /// The backend answered with a non-2xx status.
    BackendError {
        /// HTTP status code.
        status: u16,
    },
    /// Transport or decoding failure.
    Failed,
}

/// What the copilot shows for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopilotReply {
    /// Answer text.
    pub answer: String,
    /// Evidence text, empty when there is none.
    pub evidence: String,
    /// Cited documents.
    pub sources: Vec<SourceCitation>,
    /// How the ask ended.
    pub status: ReplyStatus,
}

impl CopilotReply {
    /// Reply built from a successful backend response.
    #[must_use]
    pub fn from_response(response: &Value) -> Self {
        let normalized = normalize(response);
        Self {
            answer: normalized.answer,
            evidence: normalized.evidence,
            sources: normalized.sources,
            status: ReplyStatus::Answered,
        }
    }

    /// Reply for a non-2xx status; the raw body is shown as the answer.
    #[must_use]
    pub fn backend_error(status: u16, body: &str) -> Self {
        Self {
            answer: format!("Backend error ({status}): {body}"),
            evidence: String::new(),
            sources: Vec::new(),
            status: ReplyStatus::BackendError { status },
        }
    }

    /// Reply for a transport or decoding failure.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            answer: GENERIC_FAILURE.to_string(),
            evidence: String::new(),
            sources: Vec::new(),
            status: ReplyStatus::Failed,
        }
    }

    /// Map the outcome of an ask into a reply.
    #[must_use]
    pub fn from_result(result: Result<Value, PlanRagError>) -> Self {
        match result {
            Ok(response) => Self::from_response(&response),
            Err(PlanRagError::Backend { status, body }) => Self::backend_error(status, &body),
            Err(_) => Self::failed(),
        }
    }

    /// Plain-text rendering for a terminal.
    #[must_use]
    pub fn render(&self, show_evidence: bool) -> String {
        let mut out = self.answer.clone();
        out.push('\n');

        if !self.sources.is_empty() {
            let count = self.sources.len();
            let plural = if count > 1 { "s" } else { "" };
            out.push_str(&format!("\nAnswer sources · {count} document{plural}\n"));
            for source in &self.sources {
                out.push_str(&format!("  • {}", source.label()));
                if let Some(url) = source.url.as_deref().filter(|url| *url != source.label()) {
                    out.push_str(&format!(" <{url}>"));
                }
                out.push('\n');
                if let Some(snippet) = source.snippet.as_deref() {
                    out.push_str(&format!("      {snippet}\n"));
                }
            }
        }

        if show_evidence {
            out.push_str("\nEvidence · Plan behind this answer\n");
            if self.evidence.is_empty() {
                out.push_str(NO_EVIDENCE);
            } else {
                out.push_str(&self.evidence);
            }
            out.push('\n');
        }

        out
    }
}

/// Copilot session scoped to a tenant, region and service.
#[derive(Debug)]
pub struct Copilot<C> {
    client: C,
    tenant_id: String,
    region: String,
    service: Service,
}

impl<C: PlanRagApi> Copilot<C> {
    /// Create a copilot for the default service.
    #[must_use]
    pub fn new(client: C, tenant_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            client,
            tenant_id: tenant_id.into(),
            region: region.into(),
            service: Service::default(),
        }
    }

    /// Scope questions to another service.
    #[must_use]
    pub fn with_service(mut self, service: Service) -> Self {
        self.service = service;
        self
    }

    /// Request that [`Copilot::ask`] would send for `question`.
    #[must_use]
    pub fn request_for(&self, question: &str) -> AskRequest {
        AskRequest::new(&self.tenant_id, question, self.service, &self.region)
    }

    /// Ask a question.
    ///
    /// Returns `None` without contacting the backend when the question is
    /// blank. The question is sent as typed, untrimmed.
    pub async fn ask(&self, question: &str) -> Option<CopilotReply> {
        if question.trim().is_empty() {
            tracing::debug!("Ignoring blank question");
            return None;
        }

        let request = self.request_for(question);
        let result = self.client.ask(&request).await;

        match &result {
            Ok(_) => tracing::debug!(service = %self.service, "Copilot answered"),
            Err(PlanRagError::Backend { status, .. }) => {
                tracing::error!(status, service = %self.service, "Ask failed");
            }
            Err(e) => tracing::error!(error = %e, service = %self.service, "Ask failed"),
        }

        Some(CopilotReply::from_result(result))
    }
}
