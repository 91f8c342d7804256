//! Integration tests for status checks and the API root.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_root_message() {
    let app = helpers::TestApp::new().await;

    for path in ["/api", "/api/"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::OK, "path {path}");
        assert_eq!(
            response.body["message"],
            "Hot Beans Web - Enhanced API with Chat & Upload Support"
        );
    }
}

#[tokio::test]
async fn test_create_status_check_echoes_client_name() {
    let app = helpers::TestApp::new().await;

    let first = app
        .request("POST", "/api/status", Some(json!({ "client_name": "web" })))
        .await;
    let second = app
        .request("POST", "/api/status", Some(json!({ "client_name": "web" })))
        .await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["client_name"], "web");
    assert!(first.body["timestamp"].is_string());
    assert_ne!(first.body["id"], second.body["id"]);
}

#[tokio::test]
async fn test_list_status_checks_in_insertion_order() {
    let app = helpers::TestApp::new().await;

    for name in ["a", "b", "c"] {
        app.request("POST", "/api/status", Some(json!({ "client_name": name })))
            .await;
    }

    let response = app.request("GET", "/api/status", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["client_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request_raw("POST", "/api/status", "application/json", b"{not json".to_vec())
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = helpers::TestApp::new().await;
    app.store.set_available(false);

    let response = app.request("GET", "/api/status", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "DATABASE_ERROR");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");

    let response = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"]["backend"], "memory");
    assert_eq!(response.body["chat_connections"], 0);

    app.store.set_available(false);
    let response = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["store"]["healthy"], false);
}
