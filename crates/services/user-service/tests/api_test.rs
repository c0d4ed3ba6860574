//! Integration tests for the HTTP API.
//!
//! Each test builds the real router on a fresh in-memory SQLite database
//! migrated with the production migrator.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::DatabaseConfig;
use user_service_lib::build_app;
use user_service_lib::infra::Database;

async fn test_app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let database = Database::connect(&config).await.unwrap();
    build_app(database)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_alice(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/users",
        Some(json!({"name": "Alice", "email": "alice@x.com", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}

fn assert_no_credentials(value: &Value) {
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("password"));
    assert!(!object.contains_key("password_hash"));
}

#[tokio::test]
async fn test_user_lifecycle_scenario() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Alice", "email": "alice@x.com", "password": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["email"], "alice@x.com");
    assert_no_credentials(&created);

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Bob", "email": "alice@x.com", "password": "p2"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "Email already exists");

    let (_, users) = send(&app, "GET", "/users", None).await;
    assert_eq!(users.as_array().unwrap().len(), 1);

    let (status, updated) = send(&app, "PUT", "/users/1", Some(json!({"name": "Alicia"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Alicia");
    assert_eq!(updated["email"], "alice@x.com");

    let (status, body) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    let (status, body) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_create_user_blank_fields_rejected() {
    let app = test_app().await;

    let payloads = [
        (json!({"email": "a@x.com", "password": "p"}), "Name must not be blank"),
        (json!({"name": "  ", "email": "a@x.com", "password": "p"}), "Name must not be blank"),
        (json!({"name": "A", "email": "", "password": "p"}), "Email must not be blank"),
        (json!({"name": "A", "email": "a@x.com"}), "Password must not be blank"),
    ];

    for (payload, message) in payloads {
        let (status, body) = send(&app, "POST", "/users", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], message);
    }

    let (_, users) = send(&app, "GET", "/users", None).await;
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_without_body() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/users", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Request body is missing");

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Request body is missing");
}

#[tokio::test]
async fn test_create_user_body_without_content_type() {
    let app = test_app().await;

    let payload = json!({"name": "Alice", "email": "alice@x.com", "password": "p1"});
    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_ne!(body["error"]["message"], "Request body is missing");

    let (_, users) = send(&app, "GET", "/users", None).await;
    assert!(users.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_malformed_json() {
    let app = test_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let (status, body) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_ne!(body["error"]["message"], "Request body is missing");
}

#[tokio::test]
async fn test_list_users_empty_and_hides_passwords() {
    let app = test_app().await;

    let (status, users) = send(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users, json!([]));

    create_alice(&app).await;
    send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Bob", "email": "bob@x.com", "password": "p2"})),
    )
    .await;

    let (_, users) = send(&app, "GET", "/users", None).await;
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 2);
    users.iter().for_each(assert_no_credentials);
    assert_eq!(users[0]["email"], "alice@x.com");
    assert_eq!(users[1]["email"], "bob@x.com");
}

#[tokio::test]
async fn test_get_user_is_idempotent() {
    let app = test_app().await;
    let id = create_alice(&app).await;

    let uri = format!("/users/{}", id);
    let (_, first) = send(&app, "GET", &uri, None).await;
    let (_, second) = send(&app, "GET", &uri, None).await;
    assert_eq!(first, second);
    assert_no_credentials(&first);
}

#[tokio::test]
async fn test_invalid_id_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/users/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid id");
}

#[tokio::test]
async fn test_update_only_email() {
    let app = test_app().await;
    let id = create_alice(&app).await;
    let uri = format!("/users/{}", id);

    let (status, body) = send(&app, "PUT", &uri, Some(json!({"email": "new@x.com"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "new@x.com");

    // Blank fields are ignored rather than rejected
    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({"name": " ", "email": "", "password": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["email"], "new@x.com");
}

#[tokio::test]
async fn test_update_same_email_repeatedly() {
    let app = test_app().await;
    let id = create_alice(&app).await;
    let uri = format!("/users/{}", id);

    for _ in 0..3 {
        let (status, _) = send(&app, "PUT", &uri, Some(json!({"email": "alice@x.com"}))).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_update_email_taken_by_other_user() {
    let app = test_app().await;
    let id = create_alice(&app).await;
    send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "Bob", "email": "bob@x.com", "password": "p2"})),
    )
    .await;

    let uri = format!("/users/{}", id);
    let (status, _) = send(&app, "PUT", &uri, Some(json!({"email": "bob@x.com"}))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, alice) = send(&app, "GET", &uri, None).await;
    assert_eq!(alice["email"], "alice@x.com");
}

#[tokio::test]
async fn test_update_missing_user_and_missing_body() {
    let app = test_app().await;

    let (status, _) = send(&app, "PUT", "/users/99", Some(json!({"name": "X"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let id = create_alice(&app).await;
    let (status, _) = send(&app, "PUT", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_user() {
    let app = test_app().await;

    let (status, body) = send(&app, "DELETE", "/users/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_posts_belong_to_user_and_cascade() {
    let app = test_app().await;
    let id = create_alice(&app).await;
    let posts_uri = format!("/users/{}/posts", id);

    let (status, post) = send(
        &app,
        "POST",
        &posts_uri,
        Some(json!({"name": "First", "email": "post@x.com", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["user_id"], id);
    assert_no_credentials(&post);

    let (status, _) = send(
        &app,
        "POST",
        &posts_uri,
        Some(json!({"name": "Second", "email": "post@x.com", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, posts) = send(&app, "GET", &posts_uri, None).await;
    assert_eq!(posts.as_array().unwrap().len(), 1);

    send(&app, "DELETE", &format!("/users/{}", id), None).await;

    let (status, _) = send(&app, "GET", &posts_uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_for_unknown_user() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/users/42/posts",
        Some(json!({"name": "First", "email": "post@x.com", "password": "pw"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_lists_user_routes() {
    let app = test_app().await;

    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/users").is_some());
    assert!(doc["paths"].get("/users/{id}").is_some());
    assert!(doc["paths"].get("/users/{id}/posts").is_some());
}
