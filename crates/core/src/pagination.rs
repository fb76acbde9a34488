//! Limit/offset helpers shared by paginated list queries.

/// Default page size when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound on any single page.
pub const MAX_LIMIT: i64 = 100;

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Convert a 1-based page number into a row offset for the given limit.
///
/// Pages below 1 are treated as the first page.
pub fn page_to_offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit.max(1))
}
