//! Repository for the `items` table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::item::{CreateItem, Item, UpdateItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, inventory_id, name, description, item_type_id, created_at, updated_at";

/// Same columns qualified with the `i` alias, for joined queries.
const I_COLUMNS: &str = "i.id, i.inventory_id, i.name, i.description, i.item_type_id, \
                         i.created_at, i.updated_at";

/// Provides CRUD operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item into an inventory.
    ///
    /// An `item_type_id` outside `item_types` fails with
    /// [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, input: &CreateItem) -> DbResult<Item> {
        let query = format!(
            "INSERT INTO items (inventory_id, name, description, item_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(input.inventory_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.item_type_id)
            .fetch_one(pool)
            .await?;
        Ok(item)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Item>> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(item)
    }

    /// List the items of one inventory, ordered by name.
    pub async fn list_by_inventory(pool: &PgPool, inventory_id: DbId) -> DbResult<Vec<Item>> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE inventory_id = $1
             ORDER BY name ASC, id ASC"
        );
        let items = sqlx::query_as::<_, Item>(&query)
            .bind(inventory_id)
            .fetch_all(pool)
            .await?;
        Ok(items)
    }

    /// List every item across all of a character's inventories.
    pub async fn list_by_character(pool: &PgPool, character_id: DbId) -> DbResult<Vec<Item>> {
        let query = format!(
            "SELECT {I_COLUMNS} FROM items i
             JOIN inventories inv ON inv.id = i.inventory_id
             WHERE inv.character_id = $1
             ORDER BY i.inventory_id ASC, i.name ASC, i.id ASC"
        );
        let items = sqlx::query_as::<_, Item>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await?;
        Ok(items)
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateItem) -> DbResult<Item> {
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                item_type_id = COALESCE($4, item_type_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.item_type_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("item", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("item", id));
        }
        Ok(())
    }
}
