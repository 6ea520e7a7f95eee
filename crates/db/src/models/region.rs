//! Region entity model and DTOs.

use craftadmin_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(rename = "regionId")]
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a region.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRegion {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a region. Replaces both fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRegion {
    pub name: String,
    pub description: Option<String>,
}
