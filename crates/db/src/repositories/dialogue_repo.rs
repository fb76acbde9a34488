//! Repository for the `dialogues` table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::dialogue::{CreateDialogue, Dialogue, UpdateDialogue};

const COLUMNS: &str =
    "id, character_id, content_creator_profile_id, content, created_at, updated_at";

/// Provides CRUD operations for dialogues.
pub struct DialogueRepo;

impl DialogueRepo {
    /// Insert a new dialogue. Both the character and the creator profile must exist.
    pub async fn create(pool: &PgPool, input: &CreateDialogue) -> DbResult<Dialogue> {
        let query = format!(
            "INSERT INTO dialogues (character_id, content_creator_profile_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let dialogue = sqlx::query_as::<_, Dialogue>(&query)
            .bind(input.character_id)
            .bind(input.content_creator_profile_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await?;
        Ok(dialogue)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Dialogue>> {
        let query = format!("SELECT {COLUMNS} FROM dialogues WHERE id = $1");
        let dialogue = sqlx::query_as::<_, Dialogue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(dialogue)
    }

    /// List a character's dialogues in creation order.
    pub async fn list_by_character(pool: &PgPool, character_id: DbId) -> DbResult<Vec<Dialogue>> {
        let query = format!(
            "SELECT {COLUMNS} FROM dialogues
             WHERE character_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let dialogues = sqlx::query_as::<_, Dialogue>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await?;
        Ok(dialogues)
    }

    /// List every dialogue written by a content creator, in creation order.
    pub async fn list_by_creator(
        pool: &PgPool,
        content_creator_profile_id: DbId,
    ) -> DbResult<Vec<Dialogue>> {
        let query = format!(
            "SELECT {COLUMNS} FROM dialogues
             WHERE content_creator_profile_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let dialogues = sqlx::query_as::<_, Dialogue>(&query)
            .bind(content_creator_profile_id)
            .fetch_all(pool)
            .await?;
        Ok(dialogues)
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateDialogue) -> DbResult<Dialogue> {
        let query = format!(
            "UPDATE dialogues SET content = COALESCE($2, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dialogue>(&query)
            .bind(id)
            .bind(&input.content)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("dialogue", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM dialogues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("dialogue", id));
        }
        Ok(())
    }
}
