//! Repository for the `game_modes` table.

use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::game_mode::GameMode;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// Name of the game mode new registrations join when it exists.
pub const DEFAULT_GAME_MODE: &str = "Survival";

/// Provides read operations for game modes.
pub struct GameModeRepo;

impl GameModeRepo {
    /// List all game modes ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<GameMode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_modes ORDER BY id ASC");
        sqlx::query_as::<_, GameMode>(&query).fetch_all(pool).await
    }

    /// Find a game mode by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<GameMode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_modes WHERE id = ?1");
        sqlx::query_as::<_, GameMode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The game mode assigned at registration: `Survival` if present,
    /// otherwise the lowest ID. `None` when the table is empty.
    pub async fn default_for_registration(
        pool: &SqlitePool,
    ) -> Result<Option<GameMode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM game_modes \
             ORDER BY CASE WHEN name = ?1 THEN 0 ELSE 1 END, id ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, GameMode>(&query)
            .bind(DEFAULT_GAME_MODE)
            .fetch_optional(pool)
            .await
    }
}
