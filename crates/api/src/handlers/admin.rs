//! Handlers for the `/admin` surface.
//!
//! Everything except `login` requires an admin token via [`RequireAdmin`].

use axum::extract::State;
use craftadmin_core::error::CoreError;
use craftadmin_core::roles::ROLE_ADMIN;
use craftadmin_core::types::DbId;
use craftadmin_db::models::catalog::{
    CreateItem, CreateVehicle, Item, UpdateItem, UpdateVehicle, Vehicle,
};
use craftadmin_db::models::game_mode::GameMode;
use craftadmin_db::models::player::PlayerDetails;
use craftadmin_db::models::purchase::PurchaseDetails;
use craftadmin_db::models::stats::EntityCounts;
use craftadmin_db::repositories::{
    GameModeRepo, ItemRepo, PlayerRepo, PurchaseRepo, StatsRepo, VehicleRepo,
};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::handlers::catalog::{
    normalize_item_update, normalize_new_item, normalize_new_vehicle, normalize_vehicle_update,
};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

/// Subject carried by admin tokens; the admin is not a database row.
const ADMIN_SUBJECT: DbId = 0;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub username: String,
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<AdminLoginRequest>,
) -> AppResult<Envelope<AdminLoginResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let admin = &state.config.admin;
    let Some(password_hash) = admin.password_hash.as_deref() else {
        tracing::warn!("Admin login attempted but ADMIN_PASSWORD_HASH is not set");
        return Err(invalid());
    };

    if input.username.trim() != admin.username {
        return Err(invalid());
    }

    let valid = verify_password(&input.password, password_hash)
        .map_err(|e| AppError::InternalError(format!("Invalid ADMIN_PASSWORD_HASH: {e}")))?;
    if !valid {
        tracing::warn!(username = %admin.username, "Admin login failed");
        return Err(invalid());
    }

    let token = generate_access_token(ADMIN_SUBJECT, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");
    Ok(ApiResponse::ok_with_message(
        "Login successful",
        AdminLoginResponse {
            token,
            username: admin.username.clone(),
        },
    ))
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// GET /api/admin/stats
pub async fn stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<EntityCounts>> {
    Ok(ApiResponse::ok(StatsRepo::entity_counts(&state.pool).await?))
}

/// GET /api/admin/players
pub async fn players(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<PlayerDetails>>> {
    Ok(ApiResponse::ok(PlayerRepo::list_details(&state.pool).await?))
}

/// GET /api/admin/game-modes
pub async fn game_modes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<GameMode>>> {
    Ok(ApiResponse::ok(GameModeRepo::list(&state.pool).await?))
}

/// GET /api/admin/purchases
///
/// Newest purchase first.
pub async fn purchases(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<PurchaseDetails>>> {
    Ok(ApiResponse::ok(
        PurchaseRepo::list_details_newest_first(&state.pool).await?,
    ))
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// GET /api/admin/items
pub async fn list_items(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<Item>>> {
    Ok(ApiResponse::ok(ItemRepo::list(&state.pool).await?))
}

/// GET /api/admin/items/{id}
pub async fn get_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<Item>> {
    let item = ItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Item", id))?;
    Ok(ApiResponse::ok(item))
}

/// POST /api/admin/items
pub async fn create_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateItem>,
) -> AppResult<Envelope<Item>> {
    let input = normalize_new_item(input)?;
    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, "Item created by admin");
    Ok(ApiResponse::ok_with_message("Item created successfully", item))
}

/// PUT /api/admin/items/{id}
pub async fn update_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateItem>,
) -> AppResult<Envelope<Item>> {
    let input = normalize_item_update(input)?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Item", id))?;
    tracing::info!(item_id = id, "Item updated by admin");
    Ok(ApiResponse::ok_with_message("Item updated successfully", item))
}

/// DELETE /api/admin/items/{id}
///
/// Fails with a conflict while purchases still reference the item.
pub async fn delete_item(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<()>> {
    if !ItemRepo::delete(&state.pool, id).await? {
        return Err(not_found("Item", id));
    }
    tracing::info!(item_id = id, "Item deleted by admin");
    Ok(ApiResponse::message("Item deleted successfully"))
}

// ---------------------------------------------------------------------------
// Vehicles
// ---------------------------------------------------------------------------

/// GET /api/admin/vehicles
pub async fn list_vehicles(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<Vehicle>>> {
    Ok(ApiResponse::ok(VehicleRepo::list(&state.pool).await?))
}

/// GET /api/admin/vehicles/{id}
pub async fn get_vehicle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<Vehicle>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Vehicle", id))?;
    Ok(ApiResponse::ok(vehicle))
}

/// POST /api/admin/vehicles
pub async fn create_vehicle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateVehicle>,
) -> AppResult<Envelope<Vehicle>> {
    let input = normalize_new_vehicle(input)?;
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    tracing::info!(vehicle_id = vehicle.id, "Vehicle created by admin");
    Ok(ApiResponse::ok_with_message(
        "Vehicle created successfully",
        vehicle,
    ))
}

/// PUT /api/admin/vehicles/{id}
pub async fn update_vehicle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateVehicle>,
) -> AppResult<Envelope<Vehicle>> {
    let input = normalize_vehicle_update(input)?;
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found("Vehicle", id))?;
    tracing::info!(vehicle_id = id, "Vehicle updated by admin");
    Ok(ApiResponse::ok_with_message(
        "Vehicle updated successfully",
        vehicle,
    ))
}

/// DELETE /api/admin/vehicles/{id}
pub async fn delete_vehicle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<()>> {
    if !VehicleRepo::delete(&state.pool, id).await? {
        return Err(not_found("Vehicle", id));
    }
    tracing::info!(vehicle_id = id, "Vehicle deleted by admin");
    Ok(ApiResponse::message("Vehicle deleted successfully"))
}
