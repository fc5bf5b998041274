//! Common type definitions and utilities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type alias
pub type Timestamp = DateTime<Utc>;

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

impl SortOrder {
    /// Parse `ASC`/`DESC` in any letter case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// SQL keyword for this order
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Apply this order to an ascending comparison
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A column that a list operation is allowed to sort on.
///
/// Each list operation declares its own allow-list as an enum implementing
/// this trait; requests naming anything else fall back to the operation's
/// default.
pub trait SortField: Copy + fmt::Debug + Send + Sync + 'static {
    /// Parse the public (query string) name of the field
    fn parse(value: &str) -> Option<Self>;

    /// Column name used in SQL `ORDER BY`
    fn column(&self) -> &'static str;
}

/// A resolved sort: an allow-listed field plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F: SortField> {
    pub field: F,
    pub order: SortOrder,
}

impl<F: SortField> Sort<F> {
    pub fn new(field: F, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Resolve raw `sortBy`/`sortOrder` input against the allow-list.
    ///
    /// Unknown fields or directions silently fall back to the defaults.
    pub fn resolve(
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        default_field: F,
        default_order: SortOrder,
    ) -> Self {
        Self {
            field: sort_by.and_then(F::parse).unwrap_or(default_field),
            order: sort_order.and_then(SortOrder::parse).unwrap_or(default_order),
        }
    }

    /// `ORDER BY` clause body, e.g. `created_at DESC`
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.field.column(), self.order.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Name,
        CreatedAt,
    }

    impl SortField for Column {
        fn parse(value: &str) -> Option<Self> {
            match value {
                "name" => Some(Column::Name),
                "created_at" => Some(Column::CreatedAt),
                _ => None,
            }
        }

        fn column(&self) -> &'static str {
            match self {
                Column::Name => "name",
                Column::CreatedAt => "created_at",
            }
        }
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("asc"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("sideways"), None);
    }

    #[test]
    fn test_unknown_field_falls_back_to_default() {
        let sort = Sort::resolve(Some("password"), Some("ASC"), Column::CreatedAt, SortOrder::Desc);
        assert_eq!(sort.field, Column::CreatedAt);
        assert_eq!(sort.order, SortOrder::Asc);
        assert_eq!(sort.to_sql(), "created_at ASC");
    }

    #[test]
    fn test_allowed_field_is_kept() {
        let sort = Sort::resolve(Some("name"), Some("bogus"), Column::CreatedAt, SortOrder::Desc);
        assert_eq!(sort.field, Column::Name);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_missing_params_use_defaults() {
        let sort = Sort::resolve(None, None, Column::Name, SortOrder::Asc);
        assert_eq!(sort, Sort::new(Column::Name, SortOrder::Asc));
    }
}
