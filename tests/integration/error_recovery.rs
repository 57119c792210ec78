//! Failures are absorbed into displayable replies.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use serial_test::serial;
use skyscale_copilot::config::Config;
use skyscale_copilot::copilot::{Copilot, ReplyStatus, GENERIC_FAILURE};
use skyscale_copilot::error::{AppError, ConfigError};
use skyscale_copilot::planrag::{ClientConfig, PlanRagClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client_for;

#[tokio::test]
async fn test_backend_error_body_becomes_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(503).set_body_string("planner warming up"))
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    let reply = copilot.ask("status?").await.unwrap();

    assert_eq!(reply.answer, "Backend error (503): planner warming up");
    assert!(reply.evidence.is_empty());
    assert!(reply.sources.is_empty());
    assert_eq!(reply.status, ReplyStatus::BackendError { status: 503 });
}

#[tokio::test]
async fn test_error_body_is_not_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"answer": "should not show"})),
        )
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    let reply = copilot.ask("q").await.unwrap();

    assert!(reply.answer.starts_with("Backend error (400): "));
    assert!(reply.answer.contains("should not show"));
}

#[tokio::test]
async fn test_malformed_success_body_is_generic_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    let reply = copilot.ask("q").await.unwrap();

    assert_eq!(reply.answer, GENERIC_FAILURE);
    assert_eq!(reply.status, ReplyStatus::Failed);
}

#[tokio::test]
async fn test_unreachable_backend_is_generic_failure() {
    let config = ClientConfig::new()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout_ms(1_000);
    let client = PlanRagClient::new("k", config).unwrap();

    let copilot = Copilot::new(client, "skyscale-prod", "us-east-1");
    let reply = copilot.ask("q").await.unwrap();

    assert_eq!(reply.answer, GENERIC_FAILURE);
    assert!(reply.sources.is_empty());
}

#[test]
#[serial]
fn test_missing_api_key_is_config_error() {
    std::env::remove_var("PLANRAG_API_KEY");

    let err: AppError = Config::from_env().unwrap_err().into();
    assert!(matches!(
        err,
        AppError::Config(ConfigError::MissingRequired { ref var }) if var == "PLANRAG_API_KEY"
    ));
}
