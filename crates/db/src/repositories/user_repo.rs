//! Repository for the `users` table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::profile::ProfileKind;
use crate::models::user::{CreateUser, UpdateUser, User, UserProfiles};
use crate::repositories::ProfileRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, role_id, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// If `role_id` is `None`, defaults to 1 (PLAYER). A duplicate email
    /// fails with [`DbError::UniquenessViolation`]; an unknown role with
    /// [`DbError::ConstraintViolation`].
    pub async fn create(pool: &PgPool, input: &CreateUser) -> DbResult<User> {
        let query = format!(
            "INSERT INTO users (email, password_hash, role_id)
             VALUES ($1, $2, COALESCE($3, 1))
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_one(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> DbResult<Option<User>> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<User>> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC, id DESC");
        let users = sqlx::query_as::<_, User>(&query).fetch_all(pool).await?;
        Ok(users)
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> DbResult<User> {
        let query = format!(
            "UPDATE users SET
                email = COALESCE($2, email),
                password_hash = COALESCE($3, password_hash),
                role_id = COALESCE($4, role_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.role_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Permanently delete a user and, by cascade, every profile and
    /// everything those profiles own.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user", id));
        }
        tracing::debug!(user_id = id, "Deleted user");
        Ok(())
    }

    /// Resolve which of the three optional profiles the user owns.
    pub async fn profiles(pool: &PgPool, user_id: DbId) -> DbResult<UserProfiles> {
        Ok(UserProfiles {
            player: ProfileRepo::find_by_user(pool, ProfileKind::Player, user_id).await?,
            admin: ProfileRepo::find_by_user(pool, ProfileKind::Admin, user_id).await?,
            content_creator: ProfileRepo::find_by_user(pool, ProfileKind::ContentCreator, user_id)
                .await?,
        })
    }
}
