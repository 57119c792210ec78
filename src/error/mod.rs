//! Error types for the SkyScale copilot client.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`PlanRagError`]: PlanRAG HTTP API errors
//! - [`IngestError`]: Document draft errors
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// This is the main error type returned by public API functions.
/// It wraps all subsystem errors for unified error handling.
#[derive(Debug, Error)]
pub enum AppError {
    /// PlanRAG API error.
    #[error("PlanRAG API error: {0}")]
    PlanRag(#[from] PlanRagError),

    /// Ingestion error.
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// PlanRAG API errors.
///
/// These errors represent failures when communicating with the PlanRAG backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanRagError {
    /// The backend answered with a non-2xx status.
    #[error("Backend error ({status}): {body}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// Network or connection error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of the decoding failure.
        message: String,
    },
}

impl PlanRagError {
    /// Returns true if this error is transient and the request may be retried.
    ///
    /// Only transport failures are retryable. A backend status is an answer
    /// from the server and is surfaced as-is.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Network { .. })
    }
}

/// Document ingestion errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// A required draft field is blank.
    #[error("Missing required field: {field}")]
    Incomplete {
        /// The blank field.
        field: String,
    },

    /// The document file could not be read as text.
    #[error("Failed to read {path}: {message}")]
    FileRead {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        message: String,
    },
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
