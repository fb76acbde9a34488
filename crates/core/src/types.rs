/// All entity primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup-table primary keys are PostgreSQL SMALLINT.
pub type LookupId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
