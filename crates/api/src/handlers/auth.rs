//! Handlers for the `/auth` resource: player listing, registration, login.

use axum::extract::State;
use craftadmin_core::credentials;
use craftadmin_core::error::CoreError;
use craftadmin_core::roles::ROLE_PLAYER;
use craftadmin_core::types::DbId;
use craftadmin_core::validation::{
    validate_email, validate_max_length, MAX_PLAYER_CODE_LENGTH, STAT_MAX,
};
use craftadmin_db::models::player::{NewPlayer, Player, PlayerDetails};
use craftadmin_db::repositories::{GameModeRepo, PlayerRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::handlers::players::{ensure_identity_available, ensure_region_exists};
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`. The name becomes the player code.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub region_id: Option<DbId>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token with role `player`.
    pub token: String,
    pub player: Player,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid email or password".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/auth/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Envelope<Vec<PlayerDetails>>> {
    let players = PlayerRepo::list_details(&state.pool).await?;
    Ok(ApiResponse::ok(players))
}

/// POST /api/auth/register
///
/// New players start in the default game mode with full health and food
/// and no experience points.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterRequest>,
) -> AppResult<Envelope<Player>> {
    let region_id = match input.region_id {
        Some(id)
            if id > 0
                && !input.name.trim().is_empty()
                && !input.email.trim().is_empty()
                && !input.password.trim().is_empty() =>
        {
            id
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "Name, Email, Password and RegionId are required".into(),
            )))
        }
    };

    let code = input.name.trim();
    let email = input.email.trim();
    validate_max_length(code, MAX_PLAYER_CODE_LENGTH, "Name")?;
    validate_email(email)?;

    ensure_identity_available(&state.pool, code, email).await?;

    let game_mode = GameModeRepo::default_for_registration(&state.pool)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict("No GameMode available".into())))?;

    ensure_region_exists(&state.pool, region_id).await?;

    let password_hash = credentials::hash_password(&input.password);
    let player = PlayerRepo::create(
        &state.pool,
        &NewPlayer {
            code,
            email,
            password_hash: &password_hash,
            health: STAT_MAX,
            food: STAT_MAX,
            experience_points: 0,
            game_mode_id: game_mode.id,
            region_id: Some(region_id),
        },
    )
    .await?;

    tracing::info!(
        player_id = player.id,
        game_mode = %game_mode.name,
        region_id,
        "Player registered",
    );
    Ok(ApiResponse::ok_with_message("Registered successfully", player))
}

/// POST /api/auth/login
///
/// Verifies the password and returns a player access token. A stored
/// plaintext credential only verifies when legacy passwords are allowed,
/// and is replaced by a hash on success.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Envelope<LoginResponse>> {
    if input.email.trim().is_empty() || input.password.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and Password are required".into(),
        )));
    }

    let Some(mut player) = PlayerRepo::find_by_email(&state.pool, input.email.trim()).await?
    else {
        credentials::verify_dummy(&input.password);
        tracing::debug!("Login failed: unknown email");
        return Err(invalid_credentials());
    };

    let legacy = !credentials::is_hashed_format(&player.password);
    if legacy && !state.config.allow_legacy_passwords {
        credentials::verify_dummy(&input.password);
        tracing::warn!(player_id = player.id, "Rejected login with legacy plaintext credential");
        return Err(invalid_credentials());
    }

    if !credentials::verify_password(&player.password, &input.password) {
        tracing::debug!(player_id = player.id, "Login failed: wrong password");
        return Err(invalid_credentials());
    }

    if legacy {
        let password_hash = credentials::hash_password(&input.password);
        let upgraded = PlayerRepo::upgrade_legacy_password(
            &state.pool,
            player.id,
            &player.password,
            &password_hash,
        )
        .await?;
        if upgraded {
            tracing::info!(player_id = player.id, "Upgraded legacy password to hashed format");
            player.password = password_hash;
        }
    }

    let token = generate_access_token(player.id, ROLE_PLAYER, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(player_id = player.id, "Player logged in");
    Ok(ApiResponse::ok_with_message(
        "Login successful",
        LoginResponse { token, player },
    ))
}
