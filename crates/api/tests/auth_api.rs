//! HTTP-level tests for registration and player login.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, expect_failure, expect_success, get, login_player, post_json, post_json_auth,
    seed,
};
use craftadmin_core::credentials;
use craftadmin_db::repositories::PlayerRepo;
use serde_json::{json, Value};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_region(app: axum::Router, name: &str) -> i64 {
    let json = expect_success(post_json(app, "/api/regions", json!({ "name": name })).await).await;
    json["data"]["regionId"].as_i64().unwrap()
}

fn registration(name: &str, email: &str, region_id: i64) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "hunter22",
        "regionId": region_id,
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_survival_player(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool.clone());
    let region_id = create_region(app.clone(), "Europe").await;

    let json = expect_success(
        post_json(
            app,
            "/api/auth/register",
            registration(" Steve ", "steve@example.com", region_id),
        )
        .await,
    )
    .await;

    assert_eq!(json["message"], "Registered successfully");
    let data = &json["data"];
    assert_eq!(data["playerCode"], "Steve");
    assert_eq!(data["email"], "steve@example.com");
    assert_eq!(data["health"], 100);
    assert_eq!(data["food"], 100);
    assert_eq!(data["experiencePoints"], 0);
    assert_eq!(data["gameModeId"], 1);
    assert_eq!(data["regionId"], region_id);
    assert!(data.get("password").is_none());

    // The stored credential is hashed.
    let stored = PlayerRepo::find_by_email(&pool, "steve@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(credentials::is_hashed_format(&stored.password));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_requires_every_field(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    for body in [
        json!({ "name": "Steve", "email": "s@example.com", "password": "pw" }),
        json!({ "name": "", "email": "s@example.com", "password": "pw", "regionId": 1 }),
        json!({ "name": "Steve", "email": "s@example.com", "password": " ", "regionId": 1 }),
        json!({ "name": "Steve", "email": "s@example.com", "password": "pw", "regionId": 0 }),
    ] {
        expect_failure(
            post_json(app.clone(), "/api/auth/register", body).await,
            StatusCode::OK,
            "Name, Email, Password and RegionId are required",
        )
        .await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_rejected(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);
    let region_id = create_region(app.clone(), "Europe").await;

    expect_success(
        post_json(
            app.clone(),
            "/api/auth/register",
            registration("Alex", "alex@example.com", region_id),
        )
        .await,
    )
    .await;
    expect_failure(
        post_json(
            app,
            "/api/auth/register",
            registration("Alex2", "alex@example.com", region_id),
        )
        .await,
        StatusCode::OK,
        "Email already exists",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_code_is_rejected(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);
    let region_id = create_region(app.clone(), "Europe").await;

    expect_failure(
        post_json(
            app,
            "/api/auth/register",
            registration("PLAYER001", "new@example.com", region_id),
        )
        .await,
        StatusCode::OK,
        "PlayerCode already exists",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_region_is_rejected(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);
    expect_failure(
        post_json(
            app,
            "/api/auth/register",
            registration("Steve", "steve@example.com", 99),
        )
        .await,
        StatusCode::OK,
        "Region not found",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn registration_without_game_modes_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let region_id = create_region(app.clone(), "Europe").await;
    expect_failure(
        post_json(
            app,
            "/api/auth/register",
            registration("Steve", "steve@example.com", region_id),
        )
        .await,
        StatusCode::OK,
        "No GameMode available",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_player_token(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/auth/login",
        json!({ "email": "player1@minecraft.com", "password": "password123" }),
    )
    .await;
    let json = expect_success(response).await;

    assert_eq!(json["message"], "Login successful");
    assert!(json["data"]["token"].as_str().unwrap().len() > 20);
    assert_eq!(json["data"]["player"]["playerCode"], "PLAYER001");
    assert!(json["data"]["player"].get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_is_unauthorized(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    for body in [
        json!({ "email": "player1@minecraft.com", "password": "password124" }),
        json!({ "email": "nobody@minecraft.com", "password": "password123" }),
    ] {
        expect_failure(
            post_json(app.clone(), "/api/auth/login", body).await,
            StatusCode::UNAUTHORIZED,
            "Invalid email or password",
        )
        .await;
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_requires_email_and_password(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    expect_failure(
        post_json(app, "/api/auth/login", json!({ "email": "a@b.com" })).await,
        StatusCode::OK,
        "Email and Password are required",
    )
    .await;
}

async fn set_plaintext_password(pool: &SqlitePool, email: &str, password: &str) -> i64 {
    let player = PlayerRepo::find_by_email(pool, email).await.unwrap().unwrap();
    PlayerRepo::update_password(pool, player.id, password)
        .await
        .unwrap();
    player.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_password_is_rejected_by_default(pool: SqlitePool) {
    seed(&pool).await;
    set_plaintext_password(&pool, "player2@minecraft.com", "oldsecret").await;
    let app = common::build_test_app(pool);

    expect_failure(
        post_json(
            app,
            "/api/auth/login",
            json!({ "email": "player2@minecraft.com", "password": "oldsecret" }),
        )
        .await,
        StatusCode::UNAUTHORIZED,
        "Invalid email or password",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_password_is_upgraded_when_allowed(pool: SqlitePool) {
    seed(&pool).await;
    let id = set_plaintext_password(&pool, "player2@minecraft.com", "oldsecret").await;

    let mut config = common::test_config();
    config.allow_legacy_passwords = true;
    let app = common::build_test_app_with(pool.clone(), config);

    login_player(app.clone(), "player2@minecraft.com", "oldsecret").await;

    let stored = PlayerRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert!(credentials::is_hashed_format(&stored.password));
    assert!(credentials::verify_password(&stored.password, "oldsecret"));

    // The upgraded credential keeps working.
    login_player(app, "player2@minecraft.com", "oldsecret").await;
}

// ---------------------------------------------------------------------------
// Player listing and password change
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_list_embeds_game_mode(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let json = expect_success(get(app, "/api/auth/users").await).await;
    let players = json["data"].as_array().unwrap();
    assert_eq!(players.len(), 7);
    assert_eq!(players[0]["playerCode"], "PLAYER001");
    assert_eq!(players[0]["gameMode"]["name"], "Survival");
    assert!(players[0]["region"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn password_change_requires_own_token(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);
    let body = json!({ "playerId": 1, "newPassword": "brand-new-pass" });

    let response = post_json(app.clone(), "/api/game/players/update-password", body.clone()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["success"], false);

    let other = login_player(app.clone(), "player2@minecraft.com", "password123").await;
    expect_failure(
        post_json_auth(
            app.clone(),
            "/api/game/players/update-password",
            body.clone(),
            &other,
        )
        .await,
        StatusCode::FORBIDDEN,
        "You can only change your own password",
    )
    .await;

    let own = login_player(app.clone(), "player1@minecraft.com", "password123").await;
    let json = expect_success(
        post_json_auth(app.clone(), "/api/game/players/update-password", body, &own).await,
    )
    .await;
    assert_eq!(json["message"], "Password updated successfully");

    login_player(app.clone(), "player1@minecraft.com", "brand-new-pass").await;
    expect_failure(
        post_json(
            app,
            "/api/auth/login",
            json!({ "email": "player1@minecraft.com", "password": "password123" }),
        )
        .await,
        StatusCode::UNAUTHORIZED,
        "Invalid email or password",
    )
    .await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn password_change_requires_fields(pool: SqlitePool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);
    let token = login_player(app.clone(), "player1@minecraft.com", "password123").await;

    expect_failure(
        post_json_auth(
            app,
            "/api/game/players/update-password",
            json!({ "playerId": 1, "newPassword": "" }),
            &token,
        )
        .await,
        StatusCode::OK,
        "PlayerId and NewPassword are required",
    )
    .await;
}
