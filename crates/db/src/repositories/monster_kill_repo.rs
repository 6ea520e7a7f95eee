//! Repository for the `monster_kills` table.

use sqlx::SqlitePool;

use crate::models::monster_kill::MonsterKillDetails;

pub struct MonsterKillRepo;

impl MonsterKillRepo {
    /// All kills with player code and monster name, ordered by ID.
    pub async fn list_details(pool: &SqlitePool) -> Result<Vec<MonsterKillDetails>, sqlx::Error> {
        sqlx::query_as::<_, MonsterKillDetails>(
            "SELECT mk.id, mk.player_id, mk.monster_id, mk.killed_at, \
                    p.code AS player_code, m.name AS monster_name, m.reward AS monster_reward \
             FROM monster_kills mk \
             JOIN players p ON p.id = mk.player_id \
             JOIN monsters m ON m.id = mk.monster_id \
             ORDER BY mk.id ASC",
        )
        .fetch_all(pool)
        .await
    }
}
