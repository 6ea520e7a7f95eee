//! Catalog entities: items, vehicles, quests and monsters.

use craftadmin_core::catalog::{ItemType, VehicleType};
use craftadmin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "itemId")]
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub value: i64,
    #[sqlx(try_from = "i16")]
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// DTO for creating an item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[serde(default)]
    pub name: String,
    pub image: Option<String>,
    pub value: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// DTO for updating an item. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub image: Option<String>,
    pub value: Option<i64>,
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
}

/// A row from the `vehicles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(rename = "vehicleId")]
    pub id: DbId,
    pub name: String,
    pub image: Option<String>,
    pub value: i64,
    #[sqlx(try_from = "i16")]
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
}

/// DTO for creating a vehicle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    #[serde(default)]
    pub name: String,
    pub image: Option<String>,
    pub value: i64,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
}

/// DTO for updating a vehicle. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub name: Option<String>,
    pub image: Option<String>,
    pub value: Option<i64>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<VehicleType>,
}

/// A row from the `quests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    #[serde(rename = "questId")]
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub reward: i64,
}

/// A row from the `monsters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    #[serde(rename = "monsterId")]
    pub id: DbId,
    pub name: String,
    pub health: i64,
    pub reward: i64,
}
