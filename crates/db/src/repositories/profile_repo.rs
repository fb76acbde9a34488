//! Repository for the three one-to-one profile tables.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::profile::{Profile, ProfileKind};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, created_at, updated_at";

/// Provides create/read/delete operations for player, admin, and content
/// creator profiles. Profiles carry no mutable columns.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Attach a profile of `kind` to a user.
    ///
    /// A second profile of the same kind for one user fails with
    /// [`DbError::UniquenessViolation`]; an unknown user with
    /// [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, kind: ProfileKind, user_id: DbId) -> DbResult<Profile> {
        let query = format!(
            "INSERT INTO {table} (user_id) VALUES ($1) RETURNING {COLUMNS}",
            table = kind.table()
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(profile)
    }

    /// Find a profile by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: ProfileKind,
        id: DbId,
    ) -> DbResult<Option<Profile>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1",
            table = kind.table()
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Find the profile of `kind` owned by a user, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        kind: ProfileKind,
        user_id: DbId,
    ) -> DbResult<Option<Profile>> {
        let query = format!(
            "SELECT {COLUMNS} FROM {table} WHERE user_id = $1",
            table = kind.table()
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Permanently delete a profile and everything it owns.
    pub async fn delete(pool: &PgPool, kind: ProfileKind, id: DbId) -> DbResult<()> {
        let query = format!("DELETE FROM {table} WHERE id = $1", table = kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found(kind.entity(), id));
        }
        Ok(())
    }
}
