//! Game mode entity model.

use craftadmin_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_modes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    #[serde(rename = "gameModeId")]
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}
