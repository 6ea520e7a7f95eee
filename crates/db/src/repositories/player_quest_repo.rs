//! Repository for the `player_quests` table.

use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::player_quest::{PlayerQuest, PlayerQuestDetails};

pub(crate) const COLUMNS: &str = "id, player_id, quest_id, status, completed_at";

pub struct PlayerQuestRepo;

impl PlayerQuestRepo {
    /// The progress row for a (player, quest) pair, if any.
    pub async fn find(
        pool: &SqlitePool,
        player_id: DbId,
        quest_id: DbId,
    ) -> Result<Option<PlayerQuest>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM player_quests WHERE player_id = ?1 AND quest_id = ?2");
        sqlx::query_as::<_, PlayerQuest>(&query)
            .bind(player_id)
            .bind(quest_id)
            .fetch_optional(pool)
            .await
    }

    /// All progress rows with player code and quest name, ordered by ID.
    pub async fn list_details(pool: &SqlitePool) -> Result<Vec<PlayerQuestDetails>, sqlx::Error> {
        sqlx::query_as::<_, PlayerQuestDetails>(
            "SELECT pq.id, pq.player_id, pq.quest_id, pq.status, pq.completed_at, \
                    p.code AS player_code, q.name AS quest_name, q.reward AS quest_reward \
             FROM player_quests pq \
             JOIN players p ON p.id = pq.player_id \
             JOIN quests q ON q.id = pq.quest_id \
             ORDER BY pq.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
