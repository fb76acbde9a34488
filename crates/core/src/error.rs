use crate::types::LookupId;

/// Domain errors raised outside the relational store.
///
/// Store-level failures (constraint and uniqueness violations, missing rows)
/// are reported by `cheese_db::DbError` instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown {lookup} id {id}")]
    UnknownLookupId {
        lookup: &'static str,
        id: LookupId,
    },
}
