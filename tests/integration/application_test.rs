//! Integration tests for job applications.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_submit_and_fetch_application() {
    let app = helpers::TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/api/job-applications",
            Some(json!({
                "firstName": "Test",
                "lastName": "User",
                "email": "test@example.com",
                "skills": ["Python"],
            })),
        )
        .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["status"], "pending");
    assert_eq!(created.body["firstName"], "Test");
    assert_eq!(created.body["skills"], json!(["Python"]));
    let id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app
        .request("GET", &format!("/api/job-applications/{id}"), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);
}

#[tokio::test]
async fn test_client_status_is_ignored() {
    let app = helpers::TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/api/job-applications",
            Some(json!({
                "firstName": "Test",
                "lastName": "User",
                "email": "test@example.com",
                "status": "approved",
            })),
        )
        .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["status"], "pending");
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/job-applications",
            Some(json!({ "firstName": "Test", "lastName": "User", "email": "nope" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_application_is_not_found() {
    let app = helpers::TestApp::new().await;

    for id in ["00000000-0000-4000-8000-000000000000", "not-a-uuid"] {
        let response = app
            .request("GET", &format!("/api/job-applications/{id}"), None)
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "id {id}");
        assert_eq!(response.body["detail"], "Application not found");
    }
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = helpers::TestApp::new().await;

    for first in ["Ann", "Ben"] {
        app.request(
            "POST",
            "/api/job-applications",
            Some(json!({ "firstName": first, "lastName": "X", "email": "x@example.com" })),
        )
        .await;
    }

    let response = app.request("GET", "/api/job-applications", None).await;
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["firstName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ben", "Ann"]);
}
