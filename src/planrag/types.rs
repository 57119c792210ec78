//! PlanRAG request types.
//!
//! Responses are not typed here: `/ask` answers are loose JSON handled by
//! [`crate::normalize`], and `/ingest` answers are only checked for success.

#![allow(clippy::missing_const_for_fn)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// SkyScale service a question or document is scoped to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Search.
    #[default]
    Search,
    /// Checkout.
    Checkout,
    /// Payments.
    Payments,
    /// Notifications.
    Notifications,
}

impl Service {
    /// Wire name of the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Checkout => "checkout",
            Self::Payments => "payments",
            Self::Notifications => "notifications",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /ask`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    /// Tenant identifier.
    pub tenant_id: String,
    /// The question as typed.
    pub question: String,
    /// Operational scope of the question.
    pub context: AskContext,
}

/// Scope sent with a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskContext {
    /// Service the question is about.
    pub service_name: Service,
    /// Region the question is about.
    pub region: String,
}

impl AskRequest {
    /// Create a new ask request.
    #[must_use]
    pub fn new(
        tenant_id: impl Into<String>,
        question: impl Into<String>,
        service_name: Service,
        region: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            question: question.into(),
            context: AskContext {
                service_name,
                region: region.into(),
            },
        }
    }
}

/// Body of `POST /ingest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    /// Tenant identifier.
    pub tenant_id: String,
    /// Service the document belongs to.
    pub service_name: Service,
    /// Region the document belongs to.
    pub region: String,
    /// The document itself.
    pub document: IngestDocument,
}

/// Document payload of an ingest request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestDocument {
    /// Document title.
    pub title: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Full text content.
    pub content: String,
    /// Name of the uploaded file, if the content came from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filename: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_ask_request_wire_format() {
        let request = AskRequest::new(
            "skyscale-prod",
            "Search is failing, what first?",
            Service::Search,
            "us-east-1",
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap_or_default(),
            json!({
                "tenant_id": "skyscale-prod",
                "question": "Search is failing, what first?",
                "context": {"service_name": "search", "region": "us-east-1"}
            })
        );
    }

    #[test]
    fn test_ingest_request_omits_missing_filename() {
        let request = IngestRequest {
            tenant_id: "skyscale-prod".to_string(),
            service_name: Service::Payments,
            region: "us-east-1".to_string(),
            document: IngestDocument {
                title: "Untitled document".to_string(),
                tags: vec!["p1".to_string()],
                content: "body".to_string(),
                original_filename: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap_or_default(),
            json!({
                "tenant_id": "skyscale-prod",
                "service_name": "payments",
                "region": "us-east-1",
                "document": {"title": "Untitled document", "tags": ["p1"], "content": "body"}
            })
        );
    }

    #[test]
    fn test_ingest_request_includes_filename() {
        let document = IngestDocument {
            title: "t".to_string(),
            tags: Vec::new(),
            content: "c".to_string(),
            original_filename: Some("runbook.md".to_string()),
        };
        let value = serde_json::to_value(&document).unwrap_or_default();
        assert_eq!(value["original_filename"], "runbook.md");
    }

    #[test]
    fn test_service_display_matches_wire_name() {
        for &service in Service::value_variants() {
            assert_eq!(
                serde_json::to_value(service).unwrap_or_default(),
                json!(service.to_string())
            );
        }
    }
}
