//! Authentication API integration tests
//!
//! Tests for registration and login.

use axum::http::{Method, StatusCode};
use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{login, register, send, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let (status, body) = register(&app.router, "alice", "a@x.io", "secret1").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "username": "alice", "email": "a@x.io" }));
    assert_eq!(app.db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    register(&app.router, "alice", "a@x.io", "secret1").await;

    assert_error_response!(
        register(&app.router, "alice2", "a@x.io", "secret2").await,
        StatusCode::CONFLICT,
        "email already exists"
    );
    assert_eq!(app.db.count("users").await, 1);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let (status, body) = register(&app.router, "al", "a@x.io", "secret1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("username"));

    let (status, _) = register(&app.router, "alice", "not-an-email", "secret1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = register(&app.router, "alice", "a@x.io", "12345").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let long_password = "p".repeat(80);
    let (status, body) = register(&app.router, "alice", "a@x.io", &long_password).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("password"));

    assert_eq!(app.db.count("users").await, 0);
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new().await;

    let (status, body) = send(
        &app.router,
        Method::POST,
        "/api/v1/users/register",
        None,
        Some(json!({ "username": "alice" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_returns_verifiable_token() {
    let app = TestApp::new().await;
    register(&app.router, "alice", "a@x.io", "secret1").await;

    let (status, body) = login(&app.router, "a@x.io", "secret1").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "a@x.io");
    assert!(body.get("password_hash").is_none());

    let token = body["access_token"].as_str().unwrap();
    let payload = assert_ok!(app.state.users.token_maker().verify_token(token));
    assert_eq!(payload.subject, "alice");
    assert_eq!(payload.expired_at - payload.issued_at, Duration::minutes(15));
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = TestApp::new().await;
    register(&app.router, "alice", "a@x.io", "secret1").await;

    let wrong_password = login(&app.router, "a@x.io", "wrong-password").await;
    let unknown_email = login(&app.router, "nobody@x.io", "secret1").await;

    assert_eq!(wrong_password, unknown_email);
    assert_error_response!(wrong_password, StatusCode::BAD_REQUEST, "invalid email or password");
}
