//! Repository for the `quests` table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::quest::{CreateQuest, Quest, UpdateQuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content_creator_profile_id, title, description, narrative, \
                       is_active, created_at, updated_at";

/// Provides CRUD operations for quests.
pub struct QuestRepo;

impl QuestRepo {
    /// Insert a new quest, returning the created row.
    ///
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateQuest) -> DbResult<Quest> {
        let query = format!(
            "INSERT INTO quests (content_creator_profile_id, title, description, narrative, is_active)
             VALUES ($1, $2, $3, $4, COALESCE($5, true))
             RETURNING {COLUMNS}"
        );
        let quest = sqlx::query_as::<_, Quest>(&query)
            .bind(input.content_creator_profile_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.narrative)
            .bind(input.is_active)
            .fetch_one(pool)
            .await?;
        Ok(quest)
    }

    /// Find a quest by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Quest>> {
        let query = format!("SELECT {COLUMNS} FROM quests WHERE id = $1");
        let quest = sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(quest)
    }

    /// List every quest written by a content creator, newest first.
    pub async fn list_by_creator(
        pool: &PgPool,
        content_creator_profile_id: DbId,
    ) -> DbResult<Vec<Quest>> {
        let query = format!(
            "SELECT {COLUMNS} FROM quests
             WHERE content_creator_profile_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        let quests = sqlx::query_as::<_, Quest>(&query)
            .bind(content_creator_profile_id)
            .fetch_all(pool)
            .await?;
        Ok(quests)
    }

    /// List active quests across all creators, ordered by title.
    pub async fn list_active(pool: &PgPool) -> DbResult<Vec<Quest>> {
        let query = format!(
            "SELECT {COLUMNS} FROM quests
             WHERE is_active = true
             ORDER BY title ASC, id ASC"
        );
        let quests = sqlx::query_as::<_, Quest>(&query).fetch_all(pool).await?;
        Ok(quests)
    }

    /// Update a quest. Only non-`None` fields in `input` are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateQuest) -> DbResult<Quest> {
        let query = format!(
            "UPDATE quests SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                narrative = COALESCE($4, narrative),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Quest>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.narrative)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("quest", id))
    }

    /// Permanently delete a quest and its participations.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM quests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("quest", id));
        }
        Ok(())
    }
}
