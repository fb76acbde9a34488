//! Role-specific user profiles.
//!
//! The three profile tables share one shape, so a single [`Profile`] row type
//! serves all of them and [`ProfileKind`] selects the table.

use cheese_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from `player_profiles`, `admin_profiles`, or `content_creator_profiles`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Selects one of the three profile tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Player,
    Admin,
    ContentCreator,
}

impl ProfileKind {
    pub const ALL: [ProfileKind; 3] = [
        ProfileKind::Player,
        ProfileKind::Admin,
        ProfileKind::ContentCreator,
    ];

    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            ProfileKind::Player => "player_profiles",
            ProfileKind::Admin => "admin_profiles",
            ProfileKind::ContentCreator => "content_creator_profiles",
        }
    }

    /// Entity label used in `NotFound` errors.
    pub fn entity(self) -> &'static str {
        match self {
            ProfileKind::Player => "player profile",
            ProfileKind::Admin => "admin profile",
            ProfileKind::ContentCreator => "content creator profile",
        }
    }
}
