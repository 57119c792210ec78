//! Document ingestion.
//!
//! A [`DocumentDraft`] collects what the operator types or uploads; the
//! [`Ingestor`] turns a complete draft into `POST /ingest` and reports a
//! one-line outcome. The backend's acknowledgement is kept but not
//! interpreted.

use std::path::Path;

use serde_json::Value;

use crate::error::IngestError;
use crate::planrag::{IngestDocument, IngestRequest, Service};
use crate::traits::PlanRagApi;

/// Title used when the draft has none.
pub const UNTITLED_DOCUMENT: &str = "Untitled document";

/// Status line after a successful ingest.
pub const INJECTED_MESSAGE: &str = "Document injected successfully into PlanRAG.";

/// Status line after a failed ingest.
pub const FAILED_MESSAGE: &str = "Failed to inject document. Check console & backend logs.";

/// Split a comma-separated tag string, trimming and dropping empty entries.
///
/// ```
/// use skyscale_copilot::ingest::parse_tags;
///
/// assert_eq!(parse_tags("p1, search,, us-east-1 "), vec!["p1", "search", "us-east-1"]);
/// ```
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// File name with its last extension removed (`notes.v2.md` -> `notes.v2`).
#[must_use]
pub fn title_from_file_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}

/// A document being prepared for ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDraft {
    /// Tenant identifier.
    pub tenant_id: String,
    /// Service the document belongs to.
    pub service_name: Service,
    /// Region the document belongs to.
    pub region: String,
    /// Title; may be left empty.
    pub title: String,
    /// Raw comma-separated tags.
    pub tags: String,
    /// Document text.
    pub content: String,
    /// Name of the loaded file, empty when the content was typed.
    pub uploaded_file_name: String,
}

impl DocumentDraft {
    /// Empty draft scoped to a tenant, service and region.
    #[must_use]
    pub fn new(tenant_id: impl Into<String>, service_name: Service, region: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            service_name,
            region: region.into(),
            title: String::new(),
            tags: String::new(),
            content: String::new(),
            uploaded_file_name: String::new(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the raw tag string.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Replace the content with a text file.
    ///
    /// Records the file name and, when no title has been entered, derives
    /// one from the file name.
    ///
    /// Invalid UTF-8 sequences are decoded as U+FFFD and a leading byte
    /// order mark is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::FileRead`] if the file cannot be read.
    pub async fn load_file(&mut self, path: &Path) -> Result<(), IngestError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| IngestError::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        let text = String::from_utf8_lossy(&bytes);
        let content = text.strip_prefix('\u{feff}').unwrap_or(text.as_ref()).to_string();

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if self.title.is_empty() {
            self.title = title_from_file_name(&file_name).to_string();
        }
        tracing::debug!(file = %file_name, bytes = content.len(), "Loaded document file");

        self.uploaded_file_name = file_name;
        self.content = content;
        Ok(())
    }

    /// First blank required field, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.tenant_id.trim().is_empty() {
            Some("tenant_id")
        } else if self.content.trim().is_empty() {
            Some("content")
        } else {
            None
        }
    }

    /// True when tenant, service and content are all filled in.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Build the ingest request.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Incomplete`] naming the first blank required field.
    pub fn to_request(&self) -> Result<IngestRequest, IngestError> {
        if let Some(field) = self.missing_field() {
            return Err(IngestError::Incomplete {
                field: field.to_string(),
            });
        }

        let title = if self.title.is_empty() {
            UNTITLED_DOCUMENT.to_string()
        } else {
            self.title.clone()
        };
        let original_filename =
            Some(self.uploaded_file_name.clone()).filter(|name| !name.is_empty());

        Ok(IngestRequest {
            tenant_id: self.tenant_id.clone(),
            service_name: self.service_name,
            region: self.region.clone(),
            document: IngestDocument {
                title,
                tags: parse_tags(&self.tags),
                content: self.content.clone(),
                original_filename,
            },
        })
    }
}

/// Result of submitting a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    /// The backend accepted the document.
    Injected {
        /// Backend acknowledgement.
        response: Value,
    },
    /// The draft was incomplete or the backend call failed.
    Failed {
        /// Underlying reason, for logs.
        reason: String,
    },
}

impl IngestOutcome {
    /// Status line for the operator.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Injected { .. } => INJECTED_MESSAGE,
            Self::Failed { .. } => FAILED_MESSAGE,
        }
    }

    /// True for [`IngestOutcome::Injected`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Injected { .. })
    }
}

/// Submits drafts to PlanRAG.
#[derive(Debug)]
pub struct Ingestor<C> {
    client: C,
}

impl<C: PlanRagApi> Ingestor<C> {
    /// Create an ingestor.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Submit a draft.
    pub async fn submit(&self, draft: &DocumentDraft) -> IngestOutcome {
        let request = match draft.to_request() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Refusing to submit incomplete draft");
                return IngestOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        match self.client.ingest(&request).await {
            Ok(response) => {
                tracing::info!(response = %response, "Ingest response");
                IngestOutcome::Injected { response }
            }
            Err(e) => {
                tracing::error!(error = %e, title = %request.document.title, "Ingest failed");
                IngestOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
