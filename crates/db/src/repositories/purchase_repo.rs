//! Repository for the `purchases` table (reads only; writes go through
//! `LedgerRepo`).

use craftadmin_core::error::CoreError;
use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::purchase::{PurchaseDetails, PurchaseDetailsRow};

/// Purchase columns plus the joined player, item and vehicle, aliased for
/// [`PurchaseDetailsRow`].
const DETAILS_SELECT: &str = "SELECT pu.id, pu.player_id, pu.item_id, pu.vehicle_id, \
    pu.purchased_at, \
    p.code AS player_code, \
    i.name AS item_name, i.image AS item_image, i.value AS item_value, i.item_type, \
    v.name AS vehicle_name, v.image AS vehicle_image, v.value AS vehicle_value, v.vehicle_type \
    FROM purchases pu \
    LEFT JOIN players p ON p.id = pu.player_id \
    LEFT JOIN items i ON i.id = pu.item_id \
    LEFT JOIN vehicles v ON v.id = pu.vehicle_id";

pub struct PurchaseRepo;

impl PurchaseRepo {
    /// A player's purchases, oldest first (ID breaks ties).
    pub async fn list_details_by_player(
        pool: &SqlitePool,
        player_id: DbId,
    ) -> Result<Vec<PurchaseDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE pu.player_id = ?1 ORDER BY pu.purchased_at ASC, pu.id ASC"
        );
        let rows = sqlx::query_as::<_, PurchaseDetailsRow>(&query)
            .bind(player_id)
            .fetch_all(pool)
            .await?;
        into_details(rows)
    }

    /// Every purchase, newest first.
    pub async fn list_details_newest_first(
        pool: &SqlitePool,
    ) -> Result<Vec<PurchaseDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY pu.purchased_at DESC, pu.id DESC");
        let rows = sqlx::query_as::<_, PurchaseDetailsRow>(&query)
            .fetch_all(pool)
            .await?;
        into_details(rows)
    }

    /// Every purchase in insertion order.
    pub async fn list_details(pool: &SqlitePool) -> Result<Vec<PurchaseDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY pu.id ASC");
        let rows = sqlx::query_as::<_, PurchaseDetailsRow>(&query)
            .fetch_all(pool)
            .await?;
        into_details(rows)
    }
}

fn into_details(rows: Vec<PurchaseDetailsRow>) -> Result<Vec<PurchaseDetails>, sqlx::Error> {
    rows.into_iter()
        .map(|row| {
            PurchaseDetails::try_from(row).map_err(|e: CoreError| sqlx::Error::Decode(Box::new(e)))
        })
        .collect()
}
