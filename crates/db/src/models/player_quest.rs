//! Player quest progress model.

use craftadmin_core::catalog::QuestStatus;
use craftadmin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `player_quests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuest {
    #[serde(rename = "playerQuestId")]
    pub id: DbId,
    pub player_id: DbId,
    pub quest_id: DbId,
    #[sqlx(try_from = "i16")]
    pub status: QuestStatus,
    #[serde(rename = "completedDate")]
    pub completed_at: Option<Timestamp>,
}

/// Quest completion request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteQuest {
    pub player_id: DbId,
    pub quest_id: DbId,
}

/// Result of a quest completion request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletion {
    pub player_quest: PlayerQuest,
    /// Zero when the quest was already completed.
    pub reward_granted: i64,
    pub experience_points: i64,
}

/// A player quest with player code and quest name embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQuestDetails {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub player_quest: PlayerQuest,
    pub player_code: String,
    pub quest_name: String,
    pub quest_reward: i64,
}
