//! User entity model and DTOs.

use cheese_core::error::CoreError;
use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::profile::Profile;
use crate::models::status::{LookupId, UserRole};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role_id: LookupId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Resolve `role_id` against the seeded role set.
    pub fn role(&self) -> Result<UserRole, CoreError> {
        UserRole::try_from(self.role_id)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub role: UserRole,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<User> for UserResponse {
    type Error = CoreError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            role: user.role()?,
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        })
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    /// Defaults to 1 (PLAYER) if omitted.
    pub role_id: Option<LookupId>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role_id: Option<LookupId>,
}

/// Which of the three optional one-to-one profiles a user owns.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserProfiles {
    pub player: Option<Profile>,
    pub admin: Option<Profile>,
    pub content_creator: Option<Profile>,
}

impl UserProfiles {
    /// `true` when the user has none of the three profiles.
    pub fn is_empty(&self) -> bool {
        self.player.is_none() && self.admin.is_none() && self.content_creator.is_none()
    }
}
