//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//! - Secure API key storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use skyscale_copilot::config::{Config, SecretString, DEFAULT_BASE_URL};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     api_key: SecretString::new("prg_live_example"),
//!     base_url: DEFAULT_BASE_URL.to_string(),
//!     tenant_id: "skyscale-prod".to_string(),
//!     region: "us-east-1".to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 30000,
//!     max_retries: 0,
//! };
//!
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("prg_live_example"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_RETRIES, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;
use crate::planrag::ClientConfig;

/// Default PlanRAG base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default tenant.
pub const DEFAULT_TENANT_ID: &str = "skyscale-prod";

/// Default region.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default retry attempts. Zero means one request per ask.
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// The `api_key` field uses [`SecretString`] to prevent accidental logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PlanRAG API key, sent as `x-api-key`.
    pub api_key: SecretString,
    /// Base URL of the PlanRAG backend, without trailing slash.
    pub base_url: String,
    /// Tenant the copilot asks on behalf of.
    pub tenant_id: String,
    /// Region the copilot is scoped to.
    pub region: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Retry attempts for transport failures.
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `PLANRAG_API_KEY`: PlanRAG API key
    ///
    /// Optional environment variables (with defaults):
    /// - `PLANRAG_BASE_URL`: Backend base URL (default: `http://localhost:3000`)
    /// - `SKYSCALE_TENANT_ID`: Tenant (default: `skyscale-prod`)
    /// - `SKYSCALE_REGION`: Region (default: `us-east-1`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `REQUEST_TIMEOUT_MS`: Request timeout (default: `30000`)
    /// - `MAX_RETRIES`: Retry attempts on transport failure (default: `0`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `PLANRAG_API_KEY` is missing
    /// - `REQUEST_TIMEOUT_MS` or `MAX_RETRIES` is not a valid positive integer
    /// - Any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let api_key =
            std::env::var("PLANRAG_API_KEY").map_err(|_| ConfigError::MissingRequired {
                var: "PLANRAG_API_KEY".into(),
            })?;

        let base_url = std::env::var("PLANRAG_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let tenant_id =
            std::env::var("SKYSCALE_TENANT_ID").unwrap_or_else(|_| DEFAULT_TENANT_ID.into());
        let region = std::env::var("SKYSCALE_REGION").unwrap_or_else(|_| DEFAULT_REGION.into());
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let max_retries = parse_env_u32("MAX_RETRIES", DEFAULT_MAX_RETRIES)?;

        let config = Self {
            api_key: SecretString::new(api_key),
            base_url,
            tenant_id,
            region,
            log_level,
            request_timeout_ms,
            max_retries,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// HTTP client settings derived from this configuration.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout_ms(self.request_timeout_ms)
            .with_max_retries(self.max_retries)
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u32, using a default if not set.
fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
