//! Character-to-quest join entity.

use cheese_core::error::CoreError;
use cheese_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{LookupId, ParticipationStatus};

/// A row from the `quest_participations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestParticipation {
    pub id: DbId,
    pub character_id: DbId,
    pub quest_id: DbId,
    pub status_id: LookupId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl QuestParticipation {
    pub fn status(&self) -> Result<ParticipationStatus, CoreError> {
        ParticipationStatus::try_from(self.status_id)
    }
}

/// DTO for enrolling a character in a quest.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestParticipation {
    pub character_id: DbId,
    pub quest_id: DbId,
    /// Defaults to 1 (PENDING) if omitted.
    pub status_id: Option<LookupId>,
}
