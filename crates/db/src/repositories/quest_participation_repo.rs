//! Repository for the `quest_participations` join table.

use cheese_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::quest_participation::{CreateQuestParticipation, QuestParticipation};
use crate::models::status::LookupId;

const COLUMNS: &str = "id, character_id, quest_id, status_id, created_at, updated_at";

/// Provides CRUD operations for quest participations.
///
/// Any status in `participation_statuses` may be written at any time; no
/// transition rules are enforced here.
pub struct QuestParticipationRepo;

impl QuestParticipationRepo {
    /// Enrol a character in a quest.
    ///
    /// If `status_id` is `None`, defaults to 1 (PENDING). A missing character
    /// or quest fails with [`DbError::ConstraintViolation`].
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuestParticipation,
    ) -> DbResult<QuestParticipation> {
        let query = format!(
            "INSERT INTO quest_participations (character_id, quest_id, status_id)
             VALUES ($1, $2, COALESCE($3, 1))
             RETURNING {COLUMNS}"
        );
        let participation = sqlx::query_as::<_, QuestParticipation>(&query)
            .bind(input.character_id)
            .bind(input.quest_id)
            .bind(input.status_id)
            .fetch_one(pool)
            .await?;
        Ok(participation)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<QuestParticipation>> {
        let query = format!("SELECT {COLUMNS} FROM quest_participations WHERE id = $1");
        let participation = sqlx::query_as::<_, QuestParticipation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(participation)
    }

    pub async fn list_by_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> DbResult<Vec<QuestParticipation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM quest_participations
             WHERE character_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let participations = sqlx::query_as::<_, QuestParticipation>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await?;
        Ok(participations)
    }

    pub async fn list_by_quest(pool: &PgPool, quest_id: DbId) -> DbResult<Vec<QuestParticipation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM quest_participations
             WHERE quest_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        let participations = sqlx::query_as::<_, QuestParticipation>(&query)
            .bind(quest_id)
            .fetch_all(pool)
            .await?;
        Ok(participations)
    }

    /// Set the participation status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status_id: LookupId,
    ) -> DbResult<QuestParticipation> {
        let query = format!(
            "UPDATE quest_participations SET status_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QuestParticipation>(&query)
            .bind(id)
            .bind(status_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("quest participation", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM quest_participations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("quest participation", id));
        }
        Ok(())
    }
}
