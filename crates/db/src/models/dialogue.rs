//! Dialogue entity model and DTOs.

use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dialogue row from the `dialogues` table.
///
/// Owned by both a character and the content creator who wrote it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dialogue {
    pub id: DbId,
    pub character_id: DbId,
    pub content_creator_profile_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDialogue {
    pub character_id: DbId,
    pub content_creator_profile_id: DbId,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDialogue {
    pub content: Option<String>,
}
