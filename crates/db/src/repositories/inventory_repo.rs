//! Repository for the `inventories` table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::inventory::{CreateInventory, Inventory};

const COLUMNS: &str = "id, character_id, created_at, updated_at";

/// Provides create/read/delete operations for inventories.
pub struct InventoryRepo;

impl InventoryRepo {
    pub async fn create(pool: &PgPool, input: &CreateInventory) -> DbResult<Inventory> {
        let query = format!(
            "INSERT INTO inventories (character_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        let inventory = sqlx::query_as::<_, Inventory>(&query)
            .bind(input.character_id)
            .fetch_one(pool)
            .await?;
        Ok(inventory)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Inventory>> {
        let query = format!("SELECT {COLUMNS} FROM inventories WHERE id = $1");
        let inventory = sqlx::query_as::<_, Inventory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(inventory)
    }

    pub async fn list_by_character(pool: &PgPool, character_id: DbId) -> DbResult<Vec<Inventory>> {
        let query = format!(
            "SELECT {COLUMNS} FROM inventories
             WHERE character_id = $1
             ORDER BY id ASC"
        );
        let inventories = sqlx::query_as::<_, Inventory>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await?;
        Ok(inventories)
    }

    /// Permanently delete an inventory and its items.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM inventories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("inventory", id));
        }
        Ok(())
    }
}
