//! Purchase entity model and joined views.

use craftadmin_core::catalog::{ItemType, VehicleType};
use craftadmin_core::error::CoreError;
use craftadmin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::catalog::{Item, Vehicle};
use crate::models::player::PlayerRef;

/// A row from the `purchases` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "purchaseId")]
    pub id: DbId,
    pub player_id: DbId,
    pub item_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
    #[serde(rename = "purchaseDate")]
    pub purchased_at: Timestamp,
}

/// Purchase request body. Exactly one of `item_id` / `vehicle_id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchase {
    pub player_id: DbId,
    pub item_id: Option<DbId>,
    pub vehicle_id: Option<DbId>,
}

/// Result of a successful purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    #[serde(flatten)]
    pub purchase: Purchase,
    pub cost: i64,
    /// Player balance after the debit.
    pub experience_points: i64,
}

/// A purchase with its player and target embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDetails {
    #[serde(flatten)]
    pub purchase: Purchase,
    pub player: Option<PlayerRef>,
    pub item: Option<Item>,
    pub vehicle: Option<Vehicle>,
}

/// Flat join row behind [`PurchaseDetails`].
#[derive(Debug, Clone, FromRow)]
pub struct PurchaseDetailsRow {
    #[sqlx(flatten)]
    pub purchase: Purchase,
    pub player_code: Option<String>,
    pub item_name: Option<String>,
    pub item_image: Option<String>,
    pub item_value: Option<i64>,
    pub item_type: Option<i16>,
    pub vehicle_name: Option<String>,
    pub vehicle_image: Option<String>,
    pub vehicle_value: Option<i64>,
    pub vehicle_type: Option<i16>,
}

impl TryFrom<PurchaseDetailsRow> for PurchaseDetails {
    type Error = CoreError;

    fn try_from(row: PurchaseDetailsRow) -> Result<Self, Self::Error> {
        let player = row.player_code.map(|player_code| PlayerRef {
            player_id: row.purchase.player_id,
            player_code,
        });

        let item = match (row.purchase.item_id, row.item_name, row.item_value, row.item_type) {
            (Some(id), Some(name), Some(value), Some(item_type)) => Some(Item {
                id,
                name,
                image: row.item_image,
                value,
                item_type: ItemType::try_from(item_type)?,
            }),
            _ => None,
        };

        let vehicle = match (
            row.purchase.vehicle_id,
            row.vehicle_name,
            row.vehicle_value,
            row.vehicle_type,
        ) {
            (Some(id), Some(name), Some(value), Some(vehicle_type)) => Some(Vehicle {
                id,
                name,
                image: row.vehicle_image,
                value,
                vehicle_type: VehicleType::try_from(vehicle_type)?,
            }),
            _ => None,
        };

        Ok(Self {
            purchase: row.purchase,
            player,
            item,
            vehicle,
        })
    }
}
