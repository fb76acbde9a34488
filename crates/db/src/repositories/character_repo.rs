//! Repository for the `characters` table.

use cheese_core::pagination::{clamp_limit, clamp_offset, page_to_offset, DEFAULT_LIMIT, MAX_LIMIT};
use cheese_core::types::DbId;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::character::{Character, CharacterFilter, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, player_profile_id, name, customization, created_at, updated_at";

/// Same columns qualified with the `c` alias, for joined queries.
const C_COLUMNS: &str =
    "c.id, c.player_profile_id, c.name, c.customization, c.created_at, c.updated_at";

/// Provides CRUD operations for characters plus customization helpers.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// If `customization` is `None`, defaults to `'{}'::jsonb`.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> DbResult<Character> {
        let query = format!(
            "INSERT INTO characters (player_profile_id, name, customization)
             VALUES ($1, $2, COALESCE($3, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(input.player_profile_id)
            .bind(&input.name)
            .bind(&input.customization)
            .fetch_one(pool)
            .await?;
        Ok(character)
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Character>> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(character)
    }

    /// List all characters owned by a player profile, ordered by name ascending.
    pub async fn list_by_player_profile(
        pool: &PgPool,
        player_profile_id: DbId,
    ) -> DbResult<Vec<Character>> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE player_profile_id = $1
             ORDER BY name ASC, id ASC"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(player_profile_id)
            .fetch_all(pool)
            .await?;
        Ok(characters)
    }

    /// List characters matching `filter`, newest first, one page at a time.
    ///
    /// The name filter is a literal substring: `%`, `_` and `\` in it match
    /// themselves. A `page` takes precedence over `offset`.
    pub async fn list(pool: &PgPool, filter: &CharacterFilter) -> DbResult<Vec<Character>> {
        let limit = clamp_limit(filter.limit, DEFAULT_LIMIT, MAX_LIMIT);
        let offset = match filter.page {
            Some(page) => page_to_offset(page, limit),
            None => clamp_offset(filter.offset),
        };
        let query = format!(
            "SELECT {C_COLUMNS} FROM characters c
             JOIN player_profiles p ON p.id = c.player_profile_id
             WHERE ($1::TEXT IS NULL OR strpos(lower(c.name), lower($1)) > 0)
               AND ($2::TIMESTAMPTZ IS NULL OR c.created_at > $2)
               AND ($3::TIMESTAMPTZ IS NULL OR c.updated_at < $3)
               AND ($4::BIGINT IS NULL OR p.user_id = $4)
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $5 OFFSET $6"
        );
        let characters = sqlx::query_as::<_, Character>(&query)
            .bind(&filter.name)
            .bind(filter.created_after)
            .bind(filter.updated_before)
            .bind(filter.user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;
        Ok(characters)
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> DbResult<Character> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                customization = COALESCE($3, customization)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.customization)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("character", id))
    }

    /// Merge a JSON object into the existing `customization` using PostgreSQL `||`.
    ///
    /// Top-level keys in `patch` overwrite existing ones; other keys are kept.
    pub async fn patch_customization(
        pool: &PgPool,
        id: DbId,
        patch: &Map<String, Value>,
    ) -> DbResult<Character> {
        let query = format!(
            "UPDATE characters SET customization = customization || $2::jsonb
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(Json(patch))
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DbError::not_found("character", id))
    }

    /// Permanently delete a character with its inventories, items,
    /// participations, and dialogues.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("character", id));
        }
        Ok(())
    }
}
