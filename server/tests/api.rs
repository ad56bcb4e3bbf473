//! End-to-end tests over the full router, backed by the in-memory stores.

use std::sync::Arc;

use api::auth::TokenKeys;
use api::repository::{MemoryNoteRepository, MemoryUserRepository};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::router;
use server::state::AppState;

const SECRET: &str = "test-secret";

fn test_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryUserRepository::new()),
        Arc::new(MemoryNoteRepository::new()),
        TokenKeys::new(SECRET, 30),
    );
    router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

async fn register(app: &Router, name: &str, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/create-account",
        None,
        Some(json!({ "fullName": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["accessToken"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn full_scenario() {
    let app = test_app();

    // Register Alice.
    let (status, body) = send(
        &app,
        Method::POST,
        "/create-account",
        None,
        Some(json!({ "fullName": "Alice", "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["user"]["fullName"], json!("Alice"));
    assert_eq!(body["user"]["email"], json!("a@x.com"));
    assert!(body["accessToken"].is_string());

    // Log back in.
    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "pw1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Login Successful"));
    let token = body["accessToken"].as_str().unwrap().to_owned();

    // Add a note.
    let (status, body) = send(
        &app,
        Method::POST,
        "/add-note",
        Some(&token),
        Some(json!({ "title": "Shop", "content": "milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["isPinned"], json!(false));
    assert_eq!(body["note"]["tags"], json!([]));
    let note_id = body["note"]["id"].as_str().unwrap().to_owned();

    // A second note, then pin the first; it must list first.
    send(
        &app,
        Method::POST,
        "/add-note",
        Some(&token),
        Some(json!({ "title": "Other", "content": "bread crumbs" })),
    )
    .await;
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/edit-isPinned/{note_id}"),
        Some(&token),
        Some(json!({ "isPinned": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["isPinned"], json!(true));

    let (status, body) = send(&app, Method::GET, "/get-all-notes", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let notes = body.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["id"], json!(note_id));

    // Search.
    let (status, body) = send(
        &app,
        Method::GET,
        "/search-notes?query=milk",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notes"].as_array().unwrap().len(), 1);
    assert_eq!(body["notes"][0]["id"], json!(note_id));

    let (_, body) = send(
        &app,
        Method::GET,
        "/search-notes?query=granola",
        Some(&token),
        None,
    )
    .await;
    assert!(body["notes"].as_array().unwrap().is_empty());

    // Delete, then editing the same id is a 404.
    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/delete-note/{note_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/edit-note/{note_id}"),
        Some(&token),
        Some(json!({ "title": "gone" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Note not found"));
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let app = test_app();
    register(&app, "Alice", "a@x.com", "pw1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/create-account",
        None,
        Some(json!({ "fullName": "Impostor", "email": "a@x.com", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("User already exists"));
}

#[tokio::test]
async fn registration_requires_all_fields() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/create-account",
        None,
        Some(json!({ "fullName": "Alice", "email": "a@x.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("All fields are required"));
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let app = test_app();
    register(&app, "Alice", "a@x.com", "pw1").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        None,
        Some(json!({ "email": "a@x.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Invalid Credentials"));
}

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/get-all-notes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!(true));

    let (status, _) = send(&app, Method::GET, "/get-user", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    // A token for the same identity and secret, but already past its expiry.
    let claims = TokenKeys::new(SECRET, 30).verify(&token).unwrap();
    let stale = TokenKeys::new(SECRET, -5)
        .issue(claims.sub, &claims.email)
        .unwrap();

    let (status, _) = send(&app, Method::GET, "/get-user", Some(&stale), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn get_user_returns_the_profile() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    let (status, body) = send(&app, Method::GET, "/get-user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fullName"], json!("Alice"));
    assert_eq!(body["email"], json!("a@x.com"));
}

#[tokio::test]
async fn notes_are_invisible_across_users() {
    let app = test_app();
    let alice = register(&app, "Alice", "a@x.com", "pw1").await;
    let bob = register(&app, "Bob", "b@x.com", "pw2").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/add-note",
        Some(&alice),
        Some(json!({ "title": "Secret", "content": "plans" })),
    )
    .await;
    let note_id = body["note"]["id"].as_str().unwrap().to_owned();

    for (method, path) in [
        (Method::PUT, format!("/edit-note/{note_id}")),
        (Method::DELETE, format!("/delete-note/{note_id}")),
        (Method::PUT, format!("/edit-isPinned/{note_id}")),
    ] {
        let body = if method == Method::DELETE {
            None
        } else {
            Some(json!({}))
        };
        let (status, _) = send(&app, method, &path, Some(&bob), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (_, body) = send(&app, Method::GET, "/get-all-notes", Some(&bob), None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = send(
        &app,
        Method::GET,
        "/search-notes?query=plans",
        Some(&bob),
        None,
    )
    .await;
    assert!(body["notes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_note_id_reads_as_a_missing_note() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    for (method, path) in [
        (Method::PUT, "/edit-note/not-a-uuid"),
        (Method::DELETE, "/delete-note/not-a-uuid"),
        (Method::PUT, "/edit-isPinned/not-a-uuid"),
    ] {
        let body = if method == Method::DELETE {
            None
        } else {
            Some(json!({}))
        };
        let (status, body) = send(&app, method, path, Some(&token), body).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], json!(true));
        assert_eq!(body["message"], json!("Note not found"));
    }
}

#[tokio::test]
async fn malformed_json_body_is_a_validation_error() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], json!(true));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn pinning_a_missing_note_has_its_own_message() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    let missing = uuid::Uuid::new_v4();
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/edit-isPinned/{missing}"),
        Some(&token),
        Some(json!({ "isPinned": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Note to be edited not found"));
}

#[tokio::test]
async fn edit_pinned_without_flag_leaves_the_note_alone() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/add-note",
        Some(&token),
        Some(json!({ "title": "Shop", "content": "milk" })),
    )
    .await;
    let note_id = body["note"]["id"].as_str().unwrap().to_owned();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/edit-isPinned/{note_id}"),
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["isPinned"], json!(false));
}

#[tokio::test]
async fn search_requires_a_query() {
    let app = test_app();
    let token = register(&app, "Alice", "a@x.com", "pw1").await;

    let (status, body) = send(&app, Method::GET, "/search-notes", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], json!("Search query is required"));
}

#[tokio::test]
async fn root_greets() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Hello, from Notes Server!".into()));
}
