//! Integration tests for the activity classification endpoint
//!
//! The LLM endpoint is stood in for by wiremock; the service must treat
//! every failure mode as "no classification", never as an error.

mod common;

use axum::http::StatusCode;
use nutrition_planner_backend::config::{AiConfig, AppConfig};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ai_config(server: &MockServer) -> AppConfig {
    AppConfig {
        ai: AiConfig {
            enabled: true,
            base_url: server.uri(),
            model: "llama3.2".to_string(),
            api_key: None,
            timeout_secs: 5,
        },
        ..AppConfig::default()
    }
}

fn chat_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "message": { "role": "assistant", "content": content }
    }))
}

#[tokio::test]
async fn test_classify_maps_description_to_level() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_reply(
            r#"{"value": 1.55, "reasoning": "Sports three times a week."}"#,
        ))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(&server));

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": "I play football 3 times a week"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(response["classification"]["level"], "moderately_active");
    assert_eq!(response["classification"]["multiplier"], 1.55);
}

#[tokio::test]
async fn test_out_of_range_multiplier_snaps_to_nearest() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_reply(r#"{"value": 1.6}"#))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(&server));

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": "gym most days"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    // 1.6 is closest to the 1.55 constant
    assert_eq!(response["classification"]["level"], "moderately_active");
    assert_eq!(response["classification"]["multiplier"], 1.55);
}

#[tokio::test]
async fn test_upstream_failure_yields_no_classification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(&server));

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": "desk job"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert!(response["classification"].is_null());
}

#[tokio::test]
async fn test_malformed_reply_yields_no_classification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(chat_reply("not json at all"))
        .mount(&server)
        .await;

    let app = common::TestApp::with_config(ai_config(&server));

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": "desk job"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert!(response["classification"].is_null());
}

#[tokio::test]
async fn test_disabled_classifier_yields_no_classification() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": "I cycle to work daily"}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    assert!(response["classification"].is_null());
}

#[tokio::test]
async fn test_empty_description_is_rejected() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post(
            "/api/v1/activity/classify",
            &json!({"description": ""}).to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("VALIDATION_ERROR"));
}
