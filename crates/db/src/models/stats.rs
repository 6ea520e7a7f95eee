//! Aggregate projections.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::catalog::Item;
use crate::models::player::{PlayerDetails, PlayerDetailsRow};

/// An item and how many times it was bought.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPurchaseCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub item: Item,
    pub purchase_count: i64,
}

/// A player (with game mode) and how many purchases they made.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPurchaseCount {
    pub player: PlayerDetails,
    pub purchase_count: i64,
}

/// Flat join row behind [`PlayerPurchaseCount`].
#[derive(Debug, Clone, FromRow)]
pub struct PlayerPurchaseCountRow {
    #[sqlx(flatten)]
    pub details: PlayerDetailsRow,
    pub purchase_count: i64,
}

impl From<PlayerPurchaseCountRow> for PlayerPurchaseCount {
    fn from(row: PlayerPurchaseCountRow) -> Self {
        Self {
            player: row.details.into(),
            purchase_count: row.purchase_count,
        }
    }
}

/// Row counts shown on the admin overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityCounts {
    pub player_count: i64,
    pub game_mode_count: i64,
    pub item_count: i64,
    pub purchase_count: i64,
}
