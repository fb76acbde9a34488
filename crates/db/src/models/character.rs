//! Character entity model and DTOs.

use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub player_profile_id: DbId,
    pub name: String,
    /// Open-ended appearance/equipment document. Always a JSON object; defaults to `{}`.
    pub customization: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub player_profile_id: DbId,
    pub name: String,
    /// Defaults to `{}` if omitted.
    pub customization: Option<serde_json::Value>,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    /// Replaces the whole document. Use `patch_customization` to merge.
    pub customization: Option<serde_json::Value>,
}

/// Filters for the paginated character listing.
///
/// Every filter is optional; `limit`/`offset` are clamped by the repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterFilter {
    /// Case-insensitive substring match on `name`.
    pub name: Option<String>,
    pub created_after: Option<Timestamp>,
    pub updated_before: Option<Timestamp>,
    /// Owning user, resolved through the player profile.
    pub user_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// 1-based page number; overrides `offset` when set.
    pub page: Option<i64>,
}
