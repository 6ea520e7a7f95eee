//! Handler for the `/dashboard` overview.

use axum::extract::State;
use craftadmin_db::models::catalog::{Item, Monster, Quest, Vehicle};
use craftadmin_db::models::game_mode::GameMode;
use craftadmin_db::models::monster_kill::MonsterKillDetails;
use craftadmin_db::models::player::PlayerDetails;
use craftadmin_db::models::player_quest::PlayerQuestDetails;
use craftadmin_db::models::purchase::PurchaseDetails;
use craftadmin_db::repositories::{
    GameModeRepo, ItemRepo, MonsterKillRepo, MonsterRepo, PlayerQuestRepo, PlayerRepo,
    PurchaseRepo, QuestRepo, VehicleRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::state::AppState;

/// Every entity list plus the ledger history with names joined in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub players: Vec<PlayerDetails>,
    pub game_modes: Vec<GameMode>,
    pub items: Vec<Item>,
    pub vehicles: Vec<Vehicle>,
    pub quests: Vec<Quest>,
    pub monsters: Vec<Monster>,
    pub purchases: Vec<PurchaseDetails>,
    pub player_quests: Vec<PlayerQuestDetails>,
    pub monster_kills: Vec<MonsterKillDetails>,
}

/// GET /api/dashboard
pub async fn get(State(state): State<AppState>) -> AppResult<Envelope<Dashboard>> {
    let pool = &state.pool;
    let dashboard = Dashboard {
        players: PlayerRepo::list_details(pool).await?,
        game_modes: GameModeRepo::list(pool).await?,
        items: ItemRepo::list(pool).await?,
        vehicles: VehicleRepo::list(pool).await?,
        quests: QuestRepo::list(pool).await?,
        monsters: MonsterRepo::list(pool).await?,
        purchases: PurchaseRepo::list_details(pool).await?,
        player_quests: PlayerQuestRepo::list_details(pool).await?,
        monster_kills: MonsterKillRepo::list_details(pool).await?,
    };
    Ok(ApiResponse::ok(dashboard))
}
