//! PlanRAG backend client.
//!
//! This module provides:
//! - [`PlanRagClient`] for `POST /ask` and `POST /ingest`
//! - Request types for both endpoints
//! - Retry with exponential backoff for transport failures
//!
//! # Example
//!
//! ```no_run
//! use skyscale_copilot::planrag::{AskRequest, ClientConfig, PlanRagClient, Service};
//!
//! # async fn run() -> Result<(), skyscale_copilot::error::PlanRagError> {
//! let client = PlanRagClient::new("prg_live_key", ClientConfig::new())?;
//! let request = AskRequest::new("skyscale-prod", "Is search degraded?", Service::Search, "us-east-1");
//! let raw = client.ask(&request).await?;
//! println!("{raw}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod types;

pub use client::PlanRagClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS,
    DEFAULT_TIMEOUT_MS,
};
pub use types::{AskContext, AskRequest, IngestDocument, IngestRequest, Service};
