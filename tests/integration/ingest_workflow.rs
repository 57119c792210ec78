//! Ingest workflow: file → draft → `/ingest` → outcome.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use skyscale_copilot::ingest::{DocumentDraft, IngestOutcome, Ingestor, FAILED_MESSAGE, INJECTED_MESSAGE};
use skyscale_copilot::planrag::Service;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{client_for, TEST_API_KEY};

#[tokio::test]
async fn test_ingest_uploaded_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("payments-psp-outage.md");
    std::fs::write(&file, "# PSP outage\n1. fail over to secondary PSP\n").unwrap();

    Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(json!({
            "tenant_id": "skyscale-prod",
            "service_name": "payments",
            "region": "eu-west-1",
            "document": {
                "title": "payments-psp-outage",
                "tags": ["p1", "payments"],
                "content": "# PSP outage\n1. fail over to secondary PSP\n",
                "original_filename": "payments-psp-outage.md"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"chunks": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = DocumentDraft::new("skyscale-prod", Service::Payments, "eu-west-1")
        .with_tags(" p1 ,payments, ");
    draft.load_file(&file).await.unwrap();

    let outcome = Ingestor::new(client_for(&server)).submit(&draft).await;
    assert_eq!(outcome.message(), INJECTED_MESSAGE);
    assert_eq!(
        outcome,
        IngestOutcome::Injected {
            response: json!({"chunks": 2})
        }
    );
}

#[tokio::test]
async fn test_ingest_rejected_by_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(422).set_body_string("content too short"))
        .mount(&server)
        .await;

    let draft = DocumentDraft::new("skyscale-prod", Service::Search, "us-east-1").with_content("x");
    let outcome = Ingestor::new(client_for(&server)).submit(&draft).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), FAILED_MESSAGE);
}

#[tokio::test]
async fn test_ingest_success_status_with_non_json_body_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ingest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let draft = DocumentDraft::new("skyscale-prod", Service::Search, "us-east-1").with_content("x");
    let outcome = Ingestor::new(client_for(&server)).submit(&draft).await;

    assert_eq!(outcome.message(), FAILED_MESSAGE);
}
