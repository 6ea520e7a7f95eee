//! Aggregate read projections over purchases.

use sqlx::SqlitePool;

use crate::models::stats::{
    EntityCounts, ItemPurchaseCount, PlayerPurchaseCount, PlayerPurchaseCountRow,
};
use crate::repositories::player_repo::DETAILS_SELECT as PLAYER_DETAILS_SELECT;

pub struct StatsRepo;

impl StatsRepo {
    /// Items ranked by how often they were bought, most first. Items never
    /// bought are omitted.
    pub async fn most_purchased_items(
        pool: &SqlitePool,
    ) -> Result<Vec<ItemPurchaseCount>, sqlx::Error> {
        sqlx::query_as::<_, ItemPurchaseCount>(
            "SELECT i.id, i.name, i.image, i.value, i.item_type, c.purchase_count \
             FROM (SELECT item_id, COUNT(*) AS purchase_count \
                   FROM purchases WHERE item_id IS NOT NULL GROUP BY item_id) c \
             JOIN items i ON i.id = c.item_id \
             ORDER BY c.purchase_count DESC, i.id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Players who bought at least once, with their purchase count.
    pub async fn player_purchase_counts(
        pool: &SqlitePool,
    ) -> Result<Vec<PlayerPurchaseCount>, sqlx::Error> {
        let query = format!(
            "SELECT d.*, c.purchase_count \
             FROM ({PLAYER_DETAILS_SELECT}) d \
             JOIN (SELECT player_id, COUNT(*) AS purchase_count \
                   FROM purchases GROUP BY player_id) c ON c.player_id = d.id \
             ORDER BY c.purchase_count DESC, d.id ASC"
        );
        let rows = sqlx::query_as::<_, PlayerPurchaseCountRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(PlayerPurchaseCount::from).collect())
    }

    /// Row counts for the admin overview.
    pub async fn entity_counts(pool: &SqlitePool) -> Result<EntityCounts, sqlx::Error> {
        let (player_count, game_mode_count, item_count, purchase_count) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                "SELECT (SELECT COUNT(*) FROM players), \
                        (SELECT COUNT(*) FROM game_modes), \
                        (SELECT COUNT(*) FROM items), \
                        (SELECT COUNT(*) FROM purchases)",
            )
            .fetch_one(pool)
            .await?;
        Ok(EntityCounts {
            player_count,
            game_mode_count,
            item_count,
            purchase_count,
        })
    }
}
