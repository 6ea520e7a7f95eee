//! Player entity model, DTOs and the joined detail view.

use craftadmin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::game_mode::GameMode;
use crate::models::region::Region;

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "playerId")]
    pub id: DbId,
    #[serde(rename = "playerCode")]
    pub code: String,
    pub email: String,
    /// Stored credential. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub health: i32,
    pub food: i32,
    pub experience_points: i64,
    pub game_mode_id: DbId,
    pub region_id: Option<DbId>,
}

/// DTO for creating a player directly (not through registration).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    #[serde(default)]
    pub player_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub health: Option<i32>,
    pub food: Option<i32>,
    pub experience_points: Option<i64>,
    pub game_mode_id: DbId,
    pub region_id: Option<DbId>,
}

/// Insert parameters after validation and hashing.
#[derive(Debug, Clone)]
pub struct NewPlayer<'a> {
    pub code: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub health: i32,
    pub food: i32,
    pub experience_points: i64,
    pub game_mode_id: DbId,
    pub region_id: Option<DbId>,
}

/// A player with its game mode and region embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    #[serde(flatten)]
    pub player: Player,
    pub game_mode: Option<GameMode>,
    pub region: Option<Region>,
}

/// Flat join row behind [`PlayerDetails`].
#[derive(Debug, Clone, FromRow)]
pub struct PlayerDetailsRow {
    #[sqlx(flatten)]
    pub player: Player,
    pub game_mode_name: Option<String>,
    pub game_mode_description: Option<String>,
    pub region_name: Option<String>,
    pub region_description: Option<String>,
}

impl From<PlayerDetailsRow> for PlayerDetails {
    fn from(row: PlayerDetailsRow) -> Self {
        let game_mode = row.game_mode_name.map(|name| GameMode {
            id: row.player.game_mode_id,
            name,
            description: row.game_mode_description,
        });
        let region = match (row.player.region_id, row.region_name) {
            (Some(id), Some(name)) => Some(Region {
                id,
                name,
                description: row.region_description,
            }),
            _ => None,
        };
        Self {
            player: row.player,
            game_mode,
            region,
        }
    }
}

/// Minimal player reference embedded in ledger views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRef {
    pub player_id: DbId,
    pub player_code: String,
}
