//! Item entity model and DTOs.

use cheese_core::error::CoreError;
use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{ItemType, LookupId};

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    pub inventory_id: DbId,
    pub name: String,
    pub description: String,
    pub item_type_id: LookupId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Item {
    pub fn item_type(&self) -> Result<ItemType, CoreError> {
        ItemType::try_from(self.item_type_id)
    }
}

/// DTO for adding an item to an inventory.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    pub inventory_id: DbId,
    pub name: String,
    pub description: String,
    /// Must reference a row in `item_types`.
    pub item_type_id: LookupId,
}

/// DTO for updating an existing item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub item_type_id: Option<LookupId>,
}
