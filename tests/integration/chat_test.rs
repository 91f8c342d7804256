//! Integration tests for the chat REST endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use hotbeans_core::config::AppConfig;

async fn post(app: &helpers::TestApp, user: &str, message: &str) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/chat/message",
        Some(json!({ "user_name": user, "message": message })),
    )
    .await
}

#[tokio::test]
async fn test_post_message_defaults_to_user_type() {
    let app = helpers::TestApp::new().await;

    let response = post(&app, "alice", "hello").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user_name"], "alice");
    assert_eq!(response.body["message"], "hello");
    assert_eq!(response.body["message_type"], "user");
    assert!(response.body["id"].is_string());
}

#[tokio::test]
async fn test_post_admin_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/chat/message",
            Some(json!({ "user_name": "staff", "message": "hi", "message_type": "admin" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message_type"], "admin");
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let app = helpers::TestApp::new().await;

    let response = post(&app, "alice", "   ").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["detail"], "message must not be blank");
}

#[tokio::test]
async fn test_history_returns_most_recent_oldest_first() {
    let app = helpers::TestApp::new().await;

    for i in 0..5 {
        post(&app, "alice", &format!("m{i}")).await;
    }

    let response = app.request("GET", "/api/chat/messages?limit=3", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let texts: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["m2", "m3", "m4"]);
}

#[tokio::test]
async fn test_history_limit_is_clamped() {
    let mut config = AppConfig::default();
    config.chat.max_history_limit = 2;
    let app = helpers::TestApp::with_config(config).await;

    for i in 0..4 {
        post(&app, "bob", &format!("m{i}")).await;
    }

    let response = app.request("GET", "/api/chat/messages?limit=100", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app.request("GET", "/api/chat/messages?limit=0", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_rejects_non_numeric_limit() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/chat/messages?limit=abc", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
