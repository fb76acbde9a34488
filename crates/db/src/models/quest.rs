//! Quest entity model and DTOs.

use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A quest row from the `quests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Quest {
    pub id: DbId,
    pub content_creator_profile_id: DbId,
    pub title: String,
    pub description: String,
    pub narrative: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new quest.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuest {
    pub content_creator_profile_id: DbId,
    pub title: String,
    pub description: String,
    pub narrative: String,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing quest. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateQuest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub narrative: Option<String>,
    pub is_active: Option<bool>,
}
