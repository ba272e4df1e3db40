// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /hackrx/run: validation, document failures, answers and deadline

use crate::common::*;
use axum::http::StatusCode;
use docqa_node::llm::CompletionError;
use docqa_node::pipeline::{INSUFFICIENT_ANSWER, TIMEOUT_ANSWER};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const POLICY_PAGES: &[&str] = &[
    "A grace period of thirty days is provided for premium payment.",
    "Pre-existing diseases are covered after thirty-six months.",
];

fn body(documents: &str, questions: &[&str]) -> String {
    json!({ "documents": documents, "questions": questions }).to_string()
}

#[tokio::test]
async fn test_answers_in_question_order() {
    let url = serve_pdf(POLICY_PAGES).await;
    let provider = Arc::new(StubProvider::new(|prompt| {
        assert!(prompt.contains("grace period of thirty days"));
        if prompt.contains("QUESTION: What is the grace period?") {
            Ok("The grace period is thirty days.".to_string())
        } else {
            Ok("  Pre-existing diseases wait thirty-six months.  ".to_string())
        }
    }));
    let app = build_app(test_config(), provider.clone());

    let request = run_request(
        Some(API_KEY),
        &body(&url, &["What is the grace period?", "What is the PED waiting period?"]),
    );
    let (status, _, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"answers": [
            "The grace period is thirty days.",
            "Pre-existing diseases wait thirty-six months."
        ]})
    );
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_one_failure_does_not_spoil_others() {
    let url = serve_pdf(POLICY_PAGES).await;
    let provider = Arc::new(StubProvider::new(|prompt| {
        if prompt.contains("QUESTION: first") {
            Ok("The first answer is long enough.".to_string())
        } else if prompt.contains("QUESTION: second") {
            Err(CompletionError::ApiError {
                status: 503,
                message: "overloaded".to_string(),
            })
        } else {
            Ok("short".to_string())
        }
    }));
    let app = build_app(test_config(), provider);

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["first", "second", "third"]))).await;

    assert_eq!(status, StatusCode::OK);
    let answers = body["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers[0], "The first answer is long enough.");
    assert!(answers[1]
        .as_str()
        .unwrap()
        .starts_with("Unable to process this specific question:"));
    assert_eq!(answers[2], INSUFFICIENT_ANSWER);
}

#[tokio::test]
async fn test_missing_credential_fails_every_question() {
    let url = serve_pdf(POLICY_PAGES).await;
    let provider = Arc::new(StubProvider::fixed("never returned to anyone").without_credential());
    let app = build_app(test_config(), provider.clone());

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["a?", "b?"]))).await;

    assert_eq!(status, StatusCode::OK);
    let expected = "Gemini API processing error: GOOGLE_API_KEY not found in environment variables";
    assert_eq!(body, json!({ "answers": [expected, expected] }));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_short_reply_becomes_placeholder() {
    let url = serve_pdf(POLICY_PAGES).await;
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("42 days.")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["What is the grace period?"]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answers": [INSUFFICIENT_ANSWER] }));
}

#[tokio::test]
async fn test_document_over_byte_cap_answers_from_prefix() {
    let bytes = build_pdf(&[
        "A grace period of thirty days is provided for premium payment.",
        "Pre-existing diseases are covered after thirty-six months.",
        "Maternity expenses are covered after twenty-four months.",
    ])
    .unwrap();
    let cut = bytes
        .windows(b"(Maternity".len())
        .position(|w| w == b"(Maternity")
        .unwrap();
    let addr = serve_bytes(bytes).await;
    let url = format!("http://{}/policy.pdf", addr);

    let provider = Arc::new(StubProvider::new(|prompt| {
        assert!(prompt.contains("grace period of thirty days"));
        assert!(prompt.contains("thirty-six months"));
        assert!(!prompt.contains("Maternity"));
        Ok("The grace period is thirty days.".to_string())
    }));
    let mut config = test_config();
    config.document.max_document_bytes = cut;
    let app = build_app(config, provider.clone());

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["What is the grace period?"]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answers": ["The grace period is thirty days."] }));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_empty_questions_rejected() {
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("unused answer text")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body("https://example.com/a.pdf", &[]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "At least one question is required");
}

#[tokio::test]
async fn test_missing_documents_rejected() {
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("unused answer text")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), r#"{"questions": ["q?"]}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Documents URL is required");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("unused answer text")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), r#"{"documents": 5"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body:"));
}

#[tokio::test]
async fn test_unreachable_document() {
    let provider = Arc::new(StubProvider::fixed("unused answer text"));
    let app = build_app(test_config(), provider.clone());

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&unreachable_url(), &["q?"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Document fetch error:"));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_document_http_error_status() {
    let addr = serve_bytes(Vec::new()).await;
    let url = format!("http://{}/missing.pdf", addr);
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("unused answer text")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["q?"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Document fetch error:"));
    assert!(detail.contains("HTTP 404"));
}

#[tokio::test]
async fn test_non_pdf_document() {
    let addr = serve_bytes(b"<html>not a pdf</html>".to_vec()).await;
    let url = format!("http://{}/policy.pdf", addr);
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("unused answer text")));

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["q?"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Document parse error:"));
}

#[tokio::test]
async fn test_blank_document() {
    let url = serve_pdf(&[""]).await;
    let provider = Arc::new(StubProvider::fixed("unused answer text"));
    let app = build_app(test_config(), provider.clone());

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["q?"]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "No text content found in document");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_deadline_yields_single_timeout_answer() {
    let url = serve_pdf(POLICY_PAGES).await;
    let provider = Arc::new(
        StubProvider::fixed("This answer arrives far too late.").with_delay(Duration::from_secs(5)),
    );
    let mut config = test_config();
    config.request_timeout = Duration::from_millis(300);
    let app = build_app(config, provider);

    let (status, _, body) = send(app, run_request(Some(API_KEY), &body(&url, &["a?", "b?", "c?"]))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answers": [TIMEOUT_ANSWER] }));
}

#[tokio::test]
async fn test_webhook_receives_answers() {
    let url = serve_pdf(POLICY_PAGES).await;
    let (hook, mut received) = webhook_sink().await;
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("The grace period is thirty days.")));

    let request = json!({
        "documents": url,
        "questions": ["What is the grace period?"],
        "webhook_url": hook
    });
    let (status, _, body) = send(app, run_request(Some(API_KEY), &request.to_string())).await;
    assert_eq!(status, StatusCode::OK);

    let delivered = tokio::time::timeout(Duration::from_secs(5), received.recv())
        .await
        .expect("webhook not delivered")
        .unwrap();
    assert_eq!(delivered, body);
}

#[tokio::test]
async fn test_failing_webhook_does_not_change_response() {
    let url = serve_pdf(POLICY_PAGES).await;
    let app = build_app(test_config(), Arc::new(StubProvider::fixed("The grace period is thirty days.")));

    let request = json!({
        "documents": url,
        "questions": ["What is the grace period?"],
        "webhook_url": "http://127.0.0.1:9/hook"
    });
    let (status, _, body) = send(app, run_request(Some(API_KEY), &request.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "answers": ["The grace period is thirty days."] }));
}
