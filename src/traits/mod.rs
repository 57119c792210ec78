//! Trait definitions for mockable dependencies.
//!
//! - [`PlanRagApi`]: PlanRAG backend abstraction
//!
//! # Mocking
//!
//! Traits are annotated with `#[cfg_attr(test, mockall::automock)]`, which
//! generates `MockPlanRagApi` for unit tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PlanRagError;
use crate::planrag::{AskRequest, IngestRequest};

/// PlanRAG backend trait for mocking.
///
/// Implemented by [`PlanRagClient`](crate::planrag::PlanRagClient); the
/// copilot and ingestor depend only on this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlanRagApi: Send + Sync {
    /// Ask a question and return the backend's raw JSON answer.
    ///
    /// # Errors
    ///
    /// Returns [`PlanRagError::Backend`] for non-2xx answers and a transport
    /// or decoding variant otherwise.
    async fn ask(&self, request: &AskRequest) -> Result<Value, PlanRagError>;

    /// Submit a document and return the backend's raw JSON acknowledgement.
    ///
    /// # Errors
    ///
    /// Same classification as [`PlanRagApi::ask`].
    async fn ingest(&self, request: &IngestRequest) -> Result<Value, PlanRagError>;
}
