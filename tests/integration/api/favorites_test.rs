//! Favorites API integration tests
//!
//! Protected endpoints: token handling, the favorite workflow and the
//! end-to-end register, login, favorite scenario.

use axum::http::{Method, StatusCode};
use chrono::Duration;
use moviefav::backend::auth::sessions::TokenMaker;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{create_test_user, login, register, send, TestApp, TEST_JWT_SECRET};

#[tokio::test]
async fn test_alice_scenario() {
    let app = TestApp::new().await;

    let (status, _) = register(&app.router, "alice", "a@x.io", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = login(&app.router, "a@x.io", "secret1").await;
    assert_eq!(status, StatusCode::CREATED);
    let token = body["access_token"].as_str().unwrap().to_string();

    let (status, body) = send(&app.router, Method::GET, "/api/v1/favorites", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) =
        send(&app.router, Method::POST, "/api/v1/favorites/42", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(app.db.count("favorites").await, 0);
}

#[tokio::test]
async fn test_add_and_list_favorites() {
    let app = TestApp::new().await;
    app.db.insert_movie(42, "The Matrix", None).await;
    app.db.insert_movie(7, "Alien", None).await;
    let alice = create_test_user(&app.router, "alice").await;

    for id in [42, 7] {
        let (status, body) = send(
            &app.router,
            Method::POST,
            &format!("/api/v1/favorites/{id}"),
            Some(&alice.token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null(), "favorite returns an empty body");
    }

    let (status, body) =
        send(&app.router, Method::GET, "/api/v1/favorites", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["original_title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Alien", "The Matrix"]);
}

#[tokio::test]
async fn test_duplicate_favorite_is_conflict() {
    let app = TestApp::new().await;
    app.db.insert_movie(42, "The Matrix", None).await;
    let alice = create_test_user(&app.router, "alice").await;

    let first = send(&app.router, Method::POST, "/api/v1/favorites/42", Some(&alice.token), None).await;
    assert_eq!(first.0, StatusCode::OK);

    assert_error_response!(
        send(&app.router, Method::POST, "/api/v1/favorites/42", Some(&alice.token), None).await,
        StatusCode::CONFLICT,
        "movie is already favorited"
    );
    assert_eq!(app.db.count("favorites").await, 1);
}

#[tokio::test]
async fn test_favorites_are_per_user() {
    let app = TestApp::new().await;
    app.db.insert_movie(42, "The Matrix", None).await;
    let alice = create_test_user(&app.router, "alice").await;
    let bob = create_test_user(&app.router, "bob").await;

    send(&app.router, Method::POST, "/api/v1/favorites/42", Some(&alice.token), None).await;
    let (status, _) =
        send(&app.router, Method::POST, "/api/v1/favorites/42", Some(&bob.token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app.router, Method::GET, "/api/v1/favorites", Some(&bob.token), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(app.db.count("favorites").await, 2);
}

#[tokio::test]
async fn test_rejected_tokens() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app.router, "alice").await;

    let maker = TokenMaker::new(TEST_JWT_SECRET).unwrap();
    let expired = maker.create_token(&alice.username, Duration::seconds(-30)).unwrap();
    let unknown_user = maker.create_token("mallory", Duration::minutes(5)).unwrap();
    let foreign = TokenMaker::new("another-secret-that-is-32-bytes-long")
        .unwrap()
        .create_token(&alice.username, Duration::minutes(5))
        .unwrap();

    for token in [expired.as_str(), unknown_user.as_str(), foreign.as_str(), "garbage"] {
        assert_error_response!(
            send(&app.router, Method::GET, "/api/v1/favorites", Some(token), None).await,
            StatusCode::UNAUTHORIZED,
            "unauthorized"
        );
    }

    assert_error_response!(
        send(&app.router, Method::GET, "/api/v1/favorites", None, None).await,
        StatusCode::UNAUTHORIZED,
        "unauthorized"
    );
}
