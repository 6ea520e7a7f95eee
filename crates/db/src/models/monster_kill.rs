//! Monster kill model.

use craftadmin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `monster_kills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterKill {
    #[serde(rename = "monsterKillId")]
    pub id: DbId,
    pub player_id: DbId,
    pub monster_id: DbId,
    #[serde(rename = "killDate")]
    pub killed_at: Timestamp,
}

/// Monster kill request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonsterKill {
    pub player_id: DbId,
    pub monster_id: DbId,
}

/// Result of recording a kill.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterKillReceipt {
    #[serde(flatten)]
    pub monster_kill: MonsterKill,
    pub reward_granted: i64,
    pub experience_points: i64,
}

/// A kill with player code and monster name embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterKillDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub monster_kill: MonsterKill,
    pub player_code: String,
    pub monster_name: String,
    pub monster_reward: i64,
}
