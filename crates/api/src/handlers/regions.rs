//! Handlers for the `/regions` resource.

use axum::extract::State;
use craftadmin_core::error::CoreError;
use craftadmin_core::types::DbId;
use craftadmin_core::validation::{
    require_text, validate_max_length, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};
use craftadmin_db::models::region::{CreateRegion, Region, UpdateRegion};
use craftadmin_db::repositories::RegionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

fn region_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Region",
        id,
    })
}

/// Trimmed name and description, checked against column limits.
fn normalize(name: &str, description: Option<&str>) -> Result<(String, Option<String>), CoreError> {
    let name = require_text(name, "Name")?;
    validate_max_length(name, MAX_NAME_LENGTH, "Name")?;

    let description = description.map(str::trim).filter(|d| !d.is_empty());
    if let Some(description) = description {
        validate_max_length(description, MAX_DESCRIPTION_LENGTH, "Description")?;
    }
    Ok((name.to_string(), description.map(str::to_string)))
}

fn duplicate_name() -> AppError {
    AppError::Core(CoreError::Conflict("Region name already exists".into()))
}

/// GET /api/regions
pub async fn list(State(state): State<AppState>) -> AppResult<Envelope<Vec<Region>>> {
    let regions = RegionRepo::list(&state.pool).await?;
    Ok(ApiResponse::ok(regions))
}

/// GET /api/regions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<Region>> {
    let region = RegionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| region_not_found(id))?;
    Ok(ApiResponse::ok(region))
}

/// POST /api/regions
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateRegion>,
) -> AppResult<Envelope<Region>> {
    let (name, description) = normalize(&input.name, input.description.as_deref())?;

    if RegionRepo::name_exists(&state.pool, &name, None).await? {
        return Err(duplicate_name());
    }

    let region = RegionRepo::create(&state.pool, &CreateRegion { name, description }).await?;
    tracing::info!(region_id = region.id, name = %region.name, "Region created");
    Ok(ApiResponse::ok_with_message("Region created successfully", region))
}

/// PUT /api/regions/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateRegion>,
) -> AppResult<Envelope<Region>> {
    let (name, description) = normalize(&input.name, input.description.as_deref())?;

    if RegionRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(region_not_found(id));
    }
    if RegionRepo::name_exists(&state.pool, &name, Some(id)).await? {
        return Err(duplicate_name());
    }

    let region = RegionRepo::update(&state.pool, id, &UpdateRegion { name, description })
        .await?
        .ok_or_else(|| region_not_found(id))?;
    tracing::info!(region_id = id, "Region updated");
    Ok(ApiResponse::ok_with_message("Region updated successfully", region))
}

/// DELETE /api/regions/{id}
///
/// Players in the region keep their account; their region is cleared.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Envelope<()>> {
    if !RegionRepo::delete(&state.pool, id).await? {
        return Err(region_not_found(id));
    }
    tracing::info!(region_id = id, "Region deleted");
    Ok(ApiResponse::message("Region deleted successfully"))
}
