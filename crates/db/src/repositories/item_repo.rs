//! Repository for the `items` table.

use craftadmin_core::catalog::ItemType;
use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::catalog::{CreateItem, Item, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, value, item_type";

/// Provides CRUD operations and read projections for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateItem) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (name, image, value, item_type) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(input.value)
            .bind(input.item_type.id())
            .fetch_one(pool)
            .await
    }

    /// Find an item by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = ?1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all items ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE(?2, name),
                image = COALESCE(?3, image),
                value = COALESCE(?4, value),
                item_type = COALESCE(?5, item_type)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image)
            .bind(input.value)
            .bind(input.item_type.map(ItemType::id))
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Fails with a foreign-key violation if it was purchased.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Items of `item_type` strictly more valuable than `min_value`.
    pub async fn list_by_type_above_value(
        pool: &SqlitePool,
        item_type: ItemType,
        min_value: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items WHERE item_type = ?1 AND value > ?2 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(item_type.id())
            .bind(min_value)
            .fetch_all(pool)
            .await
    }

    /// Items whose name contains `keyword` (case-insensitive) and whose
    /// value is strictly below `max_value`.
    ///
    /// The name match runs in Rust: SQLite's `LOWER` only folds ASCII.
    pub async fn search_below_value(
        pool: &SqlitePool,
        keyword: &str,
        max_value: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE value < ?1 ORDER BY id ASC");
        let candidates = sqlx::query_as::<_, Item>(&query)
            .bind(max_value)
            .fetch_all(pool)
            .await?;

        let needle = keyword.to_lowercase();
        Ok(candidates
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Items a balance of `budget` can pay for (`value <= budget`).
    pub async fn list_affordable(
        pool: &SqlitePool,
        budget: i64,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE value <= ?1 ORDER BY id ASC");
        sqlx::query_as::<_, Item>(&query)
            .bind(budget)
            .fetch_all(pool)
            .await
    }
}
