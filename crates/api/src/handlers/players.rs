//! Handlers for the `/players` resource.

use axum::extract::State;
use craftadmin_core::credentials;
use craftadmin_core::error::CoreError;
use craftadmin_core::types::DbId;
use craftadmin_core::validation::{
    require_text, validate_email, validate_max_length, validate_non_negative, validate_stat,
    MAX_PLAYER_CODE_LENGTH, STAT_MAX,
};
use craftadmin_db::models::player::{CreatePlayer, NewPlayer, Player, PlayerDetails};
use craftadmin_db::repositories::{GameModeRepo, PlayerRepo, RegionRepo};
use craftadmin_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

pub(crate) fn player_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Player",
        id,
    })
}

/// Reject a code or email that another player already uses.
pub(crate) async fn ensure_identity_available(
    pool: &DbPool,
    code: &str,
    email: &str,
) -> AppResult<()> {
    if PlayerRepo::code_exists(pool, code).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "PlayerCode already exists".into(),
        )));
    }
    if PlayerRepo::email_exists(pool, email).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already exists".into(),
        )));
    }
    Ok(())
}

/// Fail unless the region exists.
pub(crate) async fn ensure_region_exists(pool: &DbPool, region_id: DbId) -> AppResult<()> {
    match RegionRepo::find_by_id(pool, region_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id: region_id,
        })),
    }
}

/// GET /api/players
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope<Vec<PlayerDetails>>> {
    let players = PlayerRepo::list_details(&state.pool).await?;
    Ok(ApiResponse::ok(players))
}

/// GET /api/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<PlayerDetails>> {
    let player = PlayerRepo::find_details_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| player_not_found(id))?;
    Ok(ApiResponse::ok(player))
}

/// POST /api/players
///
/// Creates a player with explicit stats and game mode. Health and food
/// default to 100, experience points to 0.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePlayer>,
) -> AppResult<Envelope<Player>> {
    let code = require_text(&input.player_code, "PlayerCode")?;
    validate_max_length(code, MAX_PLAYER_CODE_LENGTH, "PlayerCode")?;
    let email = require_text(&input.email, "Email")?;
    validate_email(email)?;
    if input.password.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Password is required".into(),
        )));
    }

    let health = input.health.unwrap_or(STAT_MAX);
    let food = input.food.unwrap_or(STAT_MAX);
    let experience_points = input.experience_points.unwrap_or(0);
    validate_stat(health, "Health")?;
    validate_stat(food, "Food")?;
    validate_non_negative(experience_points, "ExperiencePoints")?;

    if GameModeRepo::find_by_id(&state.pool, input.game_mode_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "GameMode",
            id: input.game_mode_id,
        }));
    }
    if let Some(region_id) = input.region_id {
        ensure_region_exists(&state.pool, region_id).await?;
    }
    ensure_identity_available(&state.pool, code, email).await?;

    let password_hash = credentials::hash_password(&input.password);
    let player = PlayerRepo::create(
        &state.pool,
        &NewPlayer {
            code,
            email,
            password_hash: &password_hash,
            health,
            food,
            experience_points,
            game_mode_id: input.game_mode_id,
            region_id: input.region_id,
        },
    )
    .await?;

    tracing::info!(player_id = player.id, code = %player.code, "Player created");
    Ok(ApiResponse::ok_with_message("Player created successfully", player))
}
