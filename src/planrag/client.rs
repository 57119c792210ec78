//! PlanRAG API client with retry logic.
//!
//! This module provides:
//! - HTTP client for the `/ask` and `/ingest` endpoints
//! - Retry with exponential backoff for transport failures
//! - Classification of non-2xx answers as [`PlanRagError::Backend`]

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use super::config::ClientConfig;
use super::types::{AskRequest, IngestRequest};
use crate::config::SecretString;
use crate::error::PlanRagError;
use crate::traits::PlanRagApi;

/// PlanRAG API client.
#[derive(Debug)]
pub struct PlanRagClient {
    client: Client,
    api_key: SecretString,
    config: ClientConfig,
}

impl PlanRagClient {
    /// Create a new PlanRAG client.
    pub fn new(
        api_key: impl Into<SecretString>,
        config: ClientConfig,
    ) -> Result<Self, PlanRagError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PlanRagError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask a question. Returns the raw JSON answer.
    pub async fn ask(&self, request: &AskRequest) -> Result<Value, PlanRagError> {
        tracing::info!(
            tenant_id = %request.tenant_id,
            service = %request.context.service_name,
            region = %request.context.region,
            "Asking copilot"
        );
        self.post_with_retry(&self.config.ask_url(), request).await
    }

    /// Submit a document for ingestion. Returns the raw JSON acknowledgement.
    pub async fn ingest(&self, request: &IngestRequest) -> Result<Value, PlanRagError> {
        tracing::info!(
            tenant_id = %request.tenant_id,
            service = %request.service_name,
            title = %request.document.title,
            content_bytes = request.document.content.len(),
            "Ingesting document"
        );
        self.post_with_retry(&self.config.ingest_url(), request)
            .await
    }

    /// POST with retry on transport failures.
    async fn post_with_retry<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, PlanRagError> {
        let mut last_error = None;
        let mut delay = self.config.retry_delay_ms;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(attempt, delay_ms = delay, "Retrying PlanRAG request");
                tokio::time::sleep(Duration::from_millis(delay)).await;
                delay = delay.saturating_mul(2);
            }

            match self.post_once(url, body).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    tracing::warn!(error = %e, attempt, "Retryable error occurred");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| PlanRagError::Network {
            message: "Unknown error after retries".to_string(),
        }))
    }

    /// Execute a single request attempt.
    async fn post_once<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<Value, PlanRagError> {
        let start = Instant::now();

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .header("x-api-key", self.api_key.expose())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                if e.is_timeout() {
                    tracing::error!(
                        url = %url,
                        elapsed_ms,
                        timeout_ms = self.config.timeout_ms,
                        "PlanRAG request timed out"
                    );
                    PlanRagError::Timeout {
                        timeout_ms: self.config.timeout_ms,
                    }
                } else {
                    tracing::error!(url = %url, elapsed_ms, error = %e, "PlanRAG request failed");
                    PlanRagError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "PlanRAG response received"
        );

        if !status.is_success() {
            let body = response.text().await.map_err(|e| {
                tracing::error!(url = %url, status = status.as_u16(), error = %e, "Failed to read PlanRAG error body");
                PlanRagError::Network {
                    message: format!("Failed to read error body: {e}"),
                }
            })?;
            tracing::error!(url = %url, status = status.as_u16(), body = %body, "PlanRAG request rejected");
            return Err(PlanRagError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| PlanRagError::UnexpectedResponse {
                message: format!("Failed to parse response: {e}"),
            })
    }
}

#[async_trait]
impl PlanRagApi for PlanRagClient {
    async fn ask(&self, request: &AskRequest) -> Result<Value, PlanRagError> {
        Self::ask(self, request).await
    }

    async fn ingest(&self, request: &IngestRequest) -> Result<Value, PlanRagError> {
        Self::ingest(self, request).await
    }
}

#[async_trait]
impl PlanRagApi for Arc<PlanRagClient> {
    async fn ask(&self, request: &AskRequest) -> Result<Value, PlanRagError> {
        PlanRagClient::ask(self.as_ref(), request).await
    }

    async fn ingest(&self, request: &IngestRequest) -> Result<Value, PlanRagError> {
        PlanRagClient::ingest(self.as_ref(), request).await
    }
}
