#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use craftadmin_api::auth::jwt::JwtConfig;
use craftadmin_api::config::{AdminConfig, ServerConfig};
use craftadmin_api::router::build_app_router;
use craftadmin_api::state::AppState;

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const SEED_PASSWORD: &str = "password123";

/// Build a test `ServerConfig` with safe defaults. Admin login is disabled
/// and legacy passwords are rejected.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        seed_database: false,
        allow_legacy_passwords: false,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password_hash: None,
        },
    }
}

/// Build the application router exactly as `main.rs` does.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the router with admin login enabled for [`TEST_ADMIN_PASSWORD`].
pub fn build_admin_app(pool: SqlitePool) -> Router {
    let mut config = test_config();
    config.admin.password_hash = Some(
        craftadmin_api::auth::password::hash_password(TEST_ADMIN_PASSWORD)
            .expect("admin password should hash"),
    );
    build_test_app_with(pool, config)
}

/// Insert the sample catalog: 5 game modes, 7 items, 7 vehicles, 7 quests,
/// 7 monsters and 7 players (password `password123`).
pub async fn seed(pool: &SqlitePool) {
    craftadmin_db::seed::seed_if_empty(pool)
        .await
        .expect("seed should succeed");
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(method: Method, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, &body, None)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, json_request(Method::POST, uri, &body, Some(token))).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::PUT, uri, &body, None)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, json_request(Method::PUT, uri, &body, Some(token))).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Assert a 200 envelope with `success: true` and return it.
pub async fn expect_success(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true, "unexpected failure: {json}");
    json
}

/// Assert an envelope with `success: false`, the given status and message.
pub async fn expect_failure(response: Response, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false, "unexpected success: {json}");
    assert_eq!(json["message"], message);
    assert!(json.get("data").is_none());
}

/// Log in a seeded player and return the bearer token.
pub async fn login_player(app: Router, email: &str, password: &str) -> String {
    let response = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    let json = expect_success(response).await;
    json["data"]["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}

/// Log in a seeded player by number (`playerN@minecraft.com`).
pub async fn login_seeded(app: Router, n: i64) -> String {
    login_player(app, &format!("player{n}@minecraft.com"), SEED_PASSWORD).await
}

/// Log in as the configured admin and return the bearer token.
pub async fn login_admin(app: Router) -> String {
    let response = post_json(
        app,
        "/api/admin/login",
        serde_json::json!({ "username": TEST_ADMIN_USERNAME, "password": TEST_ADMIN_PASSWORD }),
    )
    .await;
    let json = expect_success(response).await;
    assert_eq!(json["data"]["username"], TEST_ADMIN_USERNAME);
    json["data"]["token"]
        .as_str()
        .expect("token should be a string")
        .to_string()
}
