//! MySQL implementations of the domain repository traits.
//!
//! Ids are stored as `CHAR(36)` hyphenated UUIDs and timestamps as
//! `DATETIME(6)` in UTC. Text columns use a case-insensitive collation, so
//! equality on `email` and `ORDER BY name` ignore letter case.

mod rating_repository_impl;
mod store_repository_impl;
mod user_repository_impl;

pub use rating_repository_impl::MySqlRatingRepository;
pub use store_repository_impl::MySqlStoreRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::{MySql, QueryBuilder};
use uuid::Uuid;

use sr_core::errors::DomainError;
use sr_shared::validation::escape_like;

/// Log a failed query and hide its details behind an internal error
pub(crate) fn query_failed(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| {
        tracing::error!(error = %e, "Failed to {}", context);
        DomainError::internal(format!("Failed to {}", context))
    }
}

/// Map a column decode failure
pub(crate) fn column(name: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::internal(format!("Failed to get {}: {}", name, e))
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map_or(false, |db_err| db_err.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map_or(false, |db_err| db_err.is_foreign_key_violation())
}

pub(crate) fn parse_uuid(value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
}

/// `%needle%` for `LOWER(col) LIKE ?`, with wildcards in the input escaped
pub(crate) fn like_pattern(value: &str) -> String {
    format!("%{}%", escape_like(&value.to_lowercase()))
}

/// Append `column IN (?, ?, ...)`. Callers must rule out an empty list first.
pub(crate) fn push_in_list(builder: &mut QueryBuilder<'_, MySql>, column: &str, ids: &[Uuid]) {
    builder.push(column);
    builder.push(" IN (");
    let mut separated = builder.separated(", ");
    for id in ids {
        separated.push_bind(id.to_string());
    }
    separated.push_unseparated(")");
}

/// Convert a `COUNT(*)` result
pub(crate) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
