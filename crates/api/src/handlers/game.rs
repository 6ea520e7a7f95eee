//! Handlers for the `/game` query and mutation endpoints.

use axum::extract::State;
use craftadmin_core::catalog::ItemType;
use craftadmin_core::credentials;
use craftadmin_core::error::CoreError;
use craftadmin_core::types::DbId;
use craftadmin_db::models::catalog::{CreateItem, Item, Monster, Quest, Vehicle};
use craftadmin_db::models::game_mode::GameMode;
use craftadmin_db::models::player::PlayerDetails;
use craftadmin_db::models::purchase::PurchaseDetails;
use craftadmin_db::models::stats::{ItemPurchaseCount, PlayerPurchaseCount};
use craftadmin_db::repositories::{
    GameModeRepo, ItemRepo, MonsterRepo, PlayerRepo, PurchaseRepo, QuestRepo, StatsRepo,
    VehicleRepo,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::handlers::catalog::normalize_new_item;
use crate::handlers::players::player_not_found;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

const DEFAULT_ITEM_TYPE: ItemType = ItemType::Weapon;
const DEFAULT_MIN_VALUE: i64 = 100;
const DEFAULT_SEARCH_KEYWORD: &str = "diamond";
const DEFAULT_MAX_VALUE: i64 = 500;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameModeNameQuery {
    pub game_mode_name: Option<String>,
}

/// `?type=&minValue=`, defaulting to weapons worth more than 100.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsByTypeQuery {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub min_value: Option<i64>,
}

/// `?keyword=&maxValue=`, defaulting to "diamond" below 500.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchQuery {
    pub keyword: Option<String>,
    pub max_value: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdQuery {
    pub player_id: DbId,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePasswordRequest {
    pub player_id: Option<DbId>,
    pub new_password: String,
}

/// Everything a game client loads at startup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResources {
    pub game_modes: Vec<GameMode>,
    pub items: Vec<Item>,
    pub vehicles: Vec<Vehicle>,
    pub quests: Vec<Quest>,
    pub monsters: Vec<Monster>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/game/resources
pub async fn resources(State(state): State<AppState>) -> AppResult<Envelope<GameResources>> {
    let resources = GameResources {
        game_modes: GameModeRepo::list(&state.pool).await?,
        items: ItemRepo::list(&state.pool).await?,
        vehicles: VehicleRepo::list(&state.pool).await?,
        quests: QuestRepo::list(&state.pool).await?,
        monsters: MonsterRepo::list(&state.pool).await?,
    };
    Ok(ApiResponse::ok(resources))
}

/// GET /api/game/players/by-gamemode?gameModeName=
pub async fn players_by_game_mode(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<GameModeNameQuery>,
) -> AppResult<Envelope<Vec<PlayerDetails>>> {
    let name = params
        .game_mode_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("Game mode name is required".into()))
        })?;

    let players = PlayerRepo::list_details_by_game_mode_name(&state.pool, name).await?;
    Ok(ApiResponse::ok(players))
}

/// GET /api/game/items/by-type?type=&minValue=
///
/// Items of the type whose value is strictly greater than `minValue`.
pub async fn items_by_type(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemsByTypeQuery>,
) -> AppResult<Envelope<Vec<Item>>> {
    let item_type = match params.item_type.as_deref() {
        Some(raw) if !raw.trim().is_empty() => raw.parse::<ItemType>()?,
        _ => DEFAULT_ITEM_TYPE,
    };
    let min_value = params.min_value.unwrap_or(DEFAULT_MIN_VALUE);

    let items = ItemRepo::list_by_type_above_value(&state.pool, item_type, min_value).await?;
    Ok(ApiResponse::ok(items))
}

/// GET /api/game/items/search?keyword=&maxValue=
///
/// Case-insensitive name match, value strictly below `maxValue`.
pub async fn search_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ItemSearchQuery>,
) -> AppResult<Envelope<Vec<Item>>> {
    let keyword = params.keyword.as_deref().unwrap_or(DEFAULT_SEARCH_KEYWORD);
    let max_value = params.max_value.unwrap_or(DEFAULT_MAX_VALUE);

    let items = ItemRepo::search_below_value(&state.pool, keyword.trim(), max_value).await?;
    Ok(ApiResponse::ok(items))
}

/// GET /api/game/items/affordable?playerId=
pub async fn affordable_items(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlayerIdQuery>,
) -> AppResult<Envelope<Vec<Item>>> {
    let player = PlayerRepo::find_by_id(&state.pool, params.player_id)
        .await?
        .ok_or_else(|| player_not_found(params.player_id))?;

    let items = ItemRepo::list_affordable(&state.pool, player.experience_points).await?;
    Ok(ApiResponse::ok(items))
}

/// GET /api/game/purchases/by-player?playerId=
///
/// Oldest purchase first.
pub async fn purchases_by_player(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PlayerIdQuery>,
) -> AppResult<Envelope<Vec<PurchaseDetails>>> {
    if PlayerRepo::find_by_id(&state.pool, params.player_id)
        .await?
        .is_none()
    {
        return Err(player_not_found(params.player_id));
    }

    let purchases = PurchaseRepo::list_details_by_player(&state.pool, params.player_id).await?;
    Ok(ApiResponse::ok(purchases))
}

/// POST /api/game/items
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateItem>,
) -> AppResult<Envelope<Item>> {
    let input = normalize_new_item(input)?;
    let item = ItemRepo::create(&state.pool, &input).await?;
    tracing::info!(item_id = item.id, name = %item.name, "Item created");
    Ok(ApiResponse::ok_with_message("Item created successfully", item))
}

/// POST /api/game/players/update-password
///
/// Allowed for the player's own token or an admin token.
pub async fn update_password(
    State(state): State<AppState>,
    user: AuthUser,
    ApiJson(input): ApiJson<UpdatePasswordRequest>,
) -> AppResult<Envelope<()>> {
    let player_id = match input.player_id {
        Some(id) if id > 0 && !input.new_password.trim().is_empty() => id,
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "PlayerId and NewPassword are required".into(),
            )))
        }
    };

    if !user.can_act_for(player_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only change your own password".into(),
        )));
    }

    let password_hash = credentials::hash_password(&input.new_password);
    if !PlayerRepo::update_password(&state.pool, player_id, &password_hash).await? {
        return Err(player_not_found(player_id));
    }

    tracing::info!(player_id, changed_by = %user.role, "Player password updated");
    Ok(ApiResponse::message("Password updated successfully"))
}

/// GET /api/game/items/most-purchased
pub async fn most_purchased_items(
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<ItemPurchaseCount>>> {
    Ok(ApiResponse::ok(StatsRepo::most_purchased_items(&state.pool).await?))
}

/// GET /api/game/players/purchase-count
pub async fn player_purchase_counts(
    State(state): State<AppState>,
) -> AppResult<Envelope<Vec<PlayerPurchaseCount>>> {
    Ok(ApiResponse::ok(StatsRepo::player_purchase_counts(&state.pool).await?))
}
