//! Ask workflow: question → `/ask` → normalized reply.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use skyscale_copilot::copilot::{Copilot, CopilotReply, ReplyStatus};
use skyscale_copilot::normalize::SourceCitation;
use skyscale_copilot::planrag::Service;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{client_for, TEST_API_KEY};

#[tokio::test]
async fn test_ask_round_trip_with_rich_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_partial_json(json!({
            "tenant_id": "skyscale-prod",
            "context": {"service_name": "checkout", "region": "us-east-1"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Roll back checkout-api to v412.",
            "source": "incident-2231",
            "plan_trace": ["compare deploys", "check error budget"],
            "sources": [
                "checkout rollback runbook",
                {"name": "deploy log", "link": "https://deploys/412", "summary": "v412 → v413"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1")
        .with_service(Service::Checkout);
    let reply = copilot
        .ask("Checkout is throwing 5xx in us-east-1. What should I check first?")
        .await
        .expect("question is not blank");

    assert_eq!(
        reply,
        CopilotReply {
            answer: "Roll back checkout-api to v412.".to_string(),
            evidence: "{\n  \"source\": \"incident-2231\",\n  \"plan_trace\": [\n    \"compare deploys\",\n    \"check error budget\"\n  ]\n}".to_string(),
            sources: vec![
                SourceCitation::titled("checkout rollback runbook"),
                SourceCitation::titled("deploy log")
                    .with_url("https://deploys/412")
                    .with_snippet("v412 → v413"),
            ],
            status: ReplyStatus::Answered,
        }
    );
}

#[tokio::test]
async fn test_ask_with_unrecognized_dialect_uses_fallbacks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "shape from a newer backend",
            "citations": ["unknown key"]
        })))
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    let reply = copilot.ask("anything").await.unwrap();

    assert_eq!(reply.answer, "No answer returned from the copilot.");
    assert_eq!(reply.evidence, "");
    assert!(reply.sources.is_empty());
    assert_eq!(reply.status, ReplyStatus::Answered);
}

#[tokio::test]
async fn test_blank_question_never_reaches_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    assert!(copilot.ask("   ").await.is_none());
}

#[tokio::test]
async fn test_independent_concurrent_asks() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_partial_json(json!({"question": "first"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": "one"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_partial_json(json!({"question": "second"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "two"})))
        .mount(&server)
        .await;

    let copilot = Copilot::new(client_for(&server), "skyscale-prod", "us-east-1");
    let (first, second) = tokio::join!(copilot.ask("first"), copilot.ask("second"));

    assert_eq!(first.unwrap().answer, "one");
    assert_eq!(second.unwrap().answer, "two");
}
