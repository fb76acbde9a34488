//! Store-level error taxonomy.
//!
//! Every repository method returns [`DbResult`]. Raw `sqlx::Error`s are
//! classified by PostgreSQL SQLSTATE on conversion so callers can match on
//! the kind of integrity failure without inspecting driver internals.

use cheese_core::types::DbId;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE for `check_violation`.
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// An update or delete targeted an identifier with no row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique constraint (e.g. `uq_users_email`) rejected the write.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniquenessViolation { constraint: String },

    /// A foreign key, lookup enum, not-null, or check constraint rejected the write.
    #[error("Write violates constraint: {constraint}")]
    ConstraintViolation { constraint: String },

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    pub(crate) fn not_found(entity: &'static str, id: DbId) -> Self {
        DbError::NotFound { entity, id }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return DbError::Sqlx(err);
        };

        let constraint = db_err
            .constraint()
            .or_else(|| db_err.table())
            .unwrap_or("unknown")
            .to_string();
        let code = db_err.code().map(|c| c.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => DbError::UniquenessViolation { constraint },
            Some(FOREIGN_KEY_VIOLATION | NOT_NULL_VIOLATION | CHECK_VIOLATION) => {
                DbError::ConstraintViolation { constraint }
            }
            _ => DbError::Sqlx(err),
        }
    }
}
