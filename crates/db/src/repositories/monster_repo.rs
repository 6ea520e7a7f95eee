//! Repository for the `monsters` table.

use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::catalog::Monster;

const COLUMNS: &str = "id, name, health, reward";

pub struct MonsterRepo;

impl MonsterRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters ORDER BY id ASC");
        sqlx::query_as::<_, Monster>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Monster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monsters WHERE id = ?1");
        sqlx::query_as::<_, Monster>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
