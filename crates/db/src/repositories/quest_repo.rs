//! Repository for the `quests` table.

use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::catalog::Quest;

const COLUMNS: &str = "id, name, description, reward";

pub struct QuestRepo;

impl QuestRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests ORDER BY id ASC");
        sqlx::query_as::<_, Quest>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Quest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = ?1");
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
