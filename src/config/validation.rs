//! Configuration validation.
//!
//! Range and shape checks applied after [`Config::from_env`](super::Config::from_env)
//! has parsed the raw values.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Maximum allowed retry count.
pub const MAX_RETRIES: u32 = 10;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if any value is out of range:
/// - `PLANRAG_API_KEY` must not be blank
/// - `PLANRAG_BASE_URL` must be an `http://` or `https://` URL
/// - `SKYSCALE_TENANT_ID` must not be blank
/// - `REQUEST_TIMEOUT_MS` must be between 1000 and 300000
/// - `MAX_RETRIES` must be between 0 and 10
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.api_key.is_blank() {
        return Err(ConfigError::InvalidValue {
            var: "PLANRAG_API_KEY".into(),
            reason: "must not be empty".into(),
        });
    }

    if !(config.base_url.starts_with("http://") || config.base_url.starts_with("https://")) {
        return Err(ConfigError::InvalidValue {
            var: "PLANRAG_BASE_URL".into(),
            reason: "must start with http:// or https://".into(),
        });
    }

    if config.tenant_id.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "SKYSCALE_TENANT_ID".into(),
            reason: "must not be empty".into(),
        });
    }

    if config.request_timeout_ms < MIN_TIMEOUT_MS || config.request_timeout_ms > MAX_TIMEOUT_MS {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    if config.max_retries > MAX_RETRIES {
        return Err(ConfigError::InvalidValue {
            var: "MAX_RETRIES".into(),
            reason: format!("must be between 0 and {MAX_RETRIES}"),
        });
    }

    Ok(())
}
