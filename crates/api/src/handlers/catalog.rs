//! Catalog listings and the shared item/vehicle input checks.

use axum::extract::State;
use craftadmin_core::error::CoreError;
use craftadmin_core::validation::{
    require_text, validate_max_length, validate_non_negative, MAX_IMAGE_PATH_LENGTH,
    MAX_NAME_LENGTH,
};
use craftadmin_db::models::catalog::{
    CreateItem, CreateVehicle, Item, Monster, Quest, UpdateItem, UpdateVehicle, Vehicle,
};
use craftadmin_db::models::game_mode::GameMode;
use craftadmin_db::repositories::{GameModeRepo, ItemRepo, MonsterRepo, QuestRepo, VehicleRepo};

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

fn check_name(name: &str) -> Result<String, CoreError> {
    let name = require_text(name, "Name")?;
    validate_max_length(name, MAX_NAME_LENGTH, "Name")?;
    Ok(name.to_string())
}

fn check_image(image: Option<&str>) -> Result<Option<String>, CoreError> {
    let image = image.map(str::trim).filter(|i| !i.is_empty());
    if let Some(image) = image {
        validate_max_length(image, MAX_IMAGE_PATH_LENGTH, "Image")?;
    }
    Ok(image.map(str::to_string))
}

/// Trim and check a new item.
pub(crate) fn normalize_new_item(input: CreateItem) -> Result<CreateItem, CoreError> {
    validate_non_negative(input.value, "Value")?;
    Ok(CreateItem {
        name: check_name(&input.name)?,
        image: check_image(input.image.as_deref())?,
        value: input.value,
        item_type: input.item_type,
    })
}

/// Trim and check the supplied fields of an item update.
pub(crate) fn normalize_item_update(input: UpdateItem) -> Result<UpdateItem, CoreError> {
    if let Some(value) = input.value {
        validate_non_negative(value, "Value")?;
    }
    Ok(UpdateItem {
        name: input.name.as_deref().map(check_name).transpose()?,
        image: match input.image.as_deref() {
            Some(image) => check_image(Some(image))?,
            None => None,
        },
        value: input.value,
        item_type: input.item_type,
    })
}

pub(crate) fn normalize_new_vehicle(input: CreateVehicle) -> Result<CreateVehicle, CoreError> {
    validate_non_negative(input.value, "Value")?;
    Ok(CreateVehicle {
        name: check_name(&input.name)?,
        image: check_image(input.image.as_deref())?,
        value: input.value,
        vehicle_type: input.vehicle_type,
    })
}

pub(crate) fn normalize_vehicle_update(input: UpdateVehicle) -> Result<UpdateVehicle, CoreError> {
    if let Some(value) = input.value {
        validate_non_negative(value, "Value")?;
    }
    Ok(UpdateVehicle {
        name: input.name.as_deref().map(check_name).transpose()?,
        image: match input.image.as_deref() {
            Some(image) => check_image(Some(image))?,
            None => None,
        },
        value: input.value,
        vehicle_type: input.vehicle_type,
    })
}

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> AppResult<Envelope<Vec<Item>>> {
    Ok(ApiResponse::ok(ItemRepo::list(&state.pool).await?))
}

/// GET /api/vehicles
pub async fn list_vehicles(State(state): State<AppState>) -> AppResult<Envelope<Vec<Vehicle>>> {
    Ok(ApiResponse::ok(VehicleRepo::list(&state.pool).await?))
}

/// GET /api/quests
pub async fn list_quests(State(state): State<AppState>) -> AppResult<Envelope<Vec<Quest>>> {
    Ok(ApiResponse::ok(QuestRepo::list(&state.pool).await?))
}

/// GET /api/monsters
pub async fn list_monsters(State(state): State<AppState>) -> AppResult<Envelope<Vec<Monster>>> {
    Ok(ApiResponse::ok(MonsterRepo::list(&state.pool).await?))
}

/// GET /api/game-modes
pub async fn list_game_modes(State(state): State<AppState>) -> AppResult<Envelope<Vec<GameMode>>> {
    Ok(ApiResponse::ok(GameModeRepo::list(&state.pool).await?))
}
