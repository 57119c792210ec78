//! Integration tests for the SkyScale copilot client.
//!
//! Each test starts a `wiremock` server standing in for PlanRAG and drives
//! the public API the way the CLI does.

#![allow(clippy::expect_used)]

mod ask_workflow;
mod error_recovery;
mod ingest_workflow;

use skyscale_copilot::planrag::{ClientConfig, PlanRagClient};
use wiremock::MockServer;

/// API key the mock server expects.
pub const TEST_API_KEY: &str = "prg_test_integration";

/// Client pointed at the mock server, no retries.
pub fn client_for(server: &MockServer) -> PlanRagClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_timeout_ms(5_000)
        .with_max_retries(0);
    PlanRagClient::new(TEST_API_KEY, config).expect("client should build")
}
