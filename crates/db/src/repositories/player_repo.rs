//! Repository for the `players` table.

use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::player::{NewPlayer, Player, PlayerDetails, PlayerDetailsRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, code, email, password, health, food, experience_points, game_mode_id, region_id";

/// Player columns plus the joined game mode and region, aliased for
/// [`PlayerDetailsRow`].
pub(crate) const DETAILS_SELECT: &str = "SELECT p.id, p.code, p.email, p.password, p.health, \
    p.food, p.experience_points, p.game_mode_id, p.region_id, \
    gm.name AS game_mode_name, gm.description AS game_mode_description, \
    r.name AS region_name, r.description AS region_description \
    FROM players p \
    LEFT JOIN game_modes gm ON gm.id = p.game_mode_id \
    LEFT JOIN regions r ON r.id = p.region_id";

/// Provides CRUD operations and joined reads for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &NewPlayer<'_>) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players \
                (code, email, password, health, food, experience_points, game_mode_id, region_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(input.code)
            .bind(input.email)
            .bind(input.password_hash)
            .bind(input.health)
            .bind(input.food)
            .bind(input.experience_points)
            .bind(input.game_mode_id)
            .bind(input.region_id)
            .fetch_one(pool)
            .await
    }

    /// Find a player by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = ?1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a player by exact email.
    pub async fn find_by_email(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE email = ?1");
        sqlx::query_as::<_, Player>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    pub async fn code_exists(pool: &SqlitePool, code: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE code = ?1)")
            .bind(code)
            .fetch_one(pool)
            .await
    }

    pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE email = ?1)")
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Find a player with game mode and region embedded.
    pub async fn find_details_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<PlayerDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE p.id = ?1");
        let row = sqlx::query_as::<_, PlayerDetailsRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PlayerDetails::from))
    }

    /// List all players with game mode and region, ordered by ID.
    pub async fn list_details(pool: &SqlitePool) -> Result<Vec<PlayerDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY p.id ASC");
        let rows = sqlx::query_as::<_, PlayerDetailsRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(PlayerDetails::from).collect())
    }

    /// Players whose game mode name equals `game_mode_name`, ignoring case.
    pub async fn list_details_by_game_mode_name(
        pool: &SqlitePool,
        game_mode_name: &str,
    ) -> Result<Vec<PlayerDetails>, sqlx::Error> {
        let wanted = game_mode_name.to_lowercase();
        Ok(Self::list_details(pool)
            .await?
            .into_iter()
            .filter(|details| {
                details
                    .game_mode
                    .as_ref()
                    .is_some_and(|mode| mode.name.to_lowercase() == wanted)
            })
            .collect())
    }

    /// Replace a player's stored credential. Returns `true` if the player exists.
    pub async fn update_password(
        pool: &SqlitePool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE players SET password = ?2 WHERE id = ?1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a legacy credential only if it is still the value that was
    /// verified, so a concurrent password change is not overwritten.
    pub async fn upgrade_legacy_password(
        pool: &SqlitePool,
        id: DbId,
        legacy: &str,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE players SET password = ?3 WHERE id = ?1 AND password = ?2")
            .bind(id)
            .bind(legacy)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
