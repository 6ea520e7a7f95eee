//! Repository for the `vehicles` table.

use craftadmin_core::catalog::VehicleType;
use craftadmin_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::catalog::{CreateVehicle, UpdateVehicle, Vehicle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, value, vehicle_type";

/// Provides CRUD operations for vehicles.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Insert a new vehicle, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateVehicle) -> Result<Vehicle, sqlx::Error> {
        let query = format!(
            "INSERT INTO vehicles (name, image, value, vehicle_type) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(input.value)
            .bind(input.vehicle_type.id())
            .fetch_one(pool)
            .await
    }

    /// Find a vehicle by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = ?1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all vehicles ordered by ID ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles ORDER BY id ASC");
        sqlx::query_as::<_, Vehicle>(&query).fetch_all(pool).await
    }

    /// Update a vehicle. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateVehicle,
    ) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!(
            "UPDATE vehicles SET
                name = COALESCE(?2, name),
                image = COALESCE(?3, image),
                value = COALESCE(?4, value),
                vehicle_type = COALESCE(?5, vehicle_type)
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.image)
            .bind(input.value)
            .bind(input.vehicle_type.map(VehicleType::id))
            .fetch_optional(pool)
            .await
    }

    /// Delete a vehicle. Fails with a foreign-key violation if it was purchased.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
