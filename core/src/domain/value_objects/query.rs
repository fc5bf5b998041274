//! Filters and sort allow-lists for list operations.

use chrono::{DateTime, Utc};
use sr_shared::types::SortField;
use uuid::Uuid;

use crate::domain::entities::{RatingValue, Role};

/// Sortable user columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortField {
    Name,
    Email,
    Address,
    Role,
    CreatedAt,
}

impl SortField for UserSortField {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "address" => Some(Self::Address),
            "role" => Some(Self::Role),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Address => "address",
            Self::Role => "role",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sortable store columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSortField {
    Name,
    Address,
    CreatedAt,
}

impl SortField for StoreSortField {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "address" => Some(Self::Address),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Sortable rating columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSortField {
    Rating,
    CreatedAt,
    UpdatedAt,
}

impl SortField for RatingSortField {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "rating" => Some(Self::Rating),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            "updated_at" | "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    fn column(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// Treat blank filter strings as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// User list filter. String fields are case-insensitive substring matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            email: non_blank(self.email),
            address: non_blank(self.address),
            role: self.role,
        }
    }
}

/// Store list filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive substring of the address
    pub address: Option<String>,
    /// Restrict to these owners; an empty list matches nothing
    pub owner_ids: Option<Vec<Uuid>>,
}

/// Rating list and aggregate filter. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingFilter {
    pub user_id: Option<Uuid>,
    pub store_id: Option<Uuid>,
    pub rating: Option<RatingValue>,
    /// Restrict to ratings by these users; an empty list matches nothing
    pub user_ids: Option<Vec<Uuid>>,
    /// Restrict to ratings of these stores; an empty list matches nothing
    pub store_ids: Option<Vec<Uuid>>,
    /// Only ratings created at or after this instant
    pub created_since: Option<DateTime<Utc>>,
}

impl RatingFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn for_store(store_id: Uuid) -> Self {
        Self {
            store_id: Some(store_id),
            ..Default::default()
        }
    }

    /// Whether an id list filter rules out every row
    pub fn matches_nothing(&self) -> bool {
        matches!(&self.user_ids, Some(ids) if ids.is_empty())
            || matches!(&self.store_ids, Some(ids) if ids.is_empty())
    }
}

impl StoreFilter {
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            address: non_blank(self.address),
            owner_ids: self.owner_ids,
        }
    }

    /// Whether the owner filter rules out every row
    pub fn matches_nothing(&self) -> bool {
        matches!(&self.owner_ids, Some(ids) if ids.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_sort_allow_list() {
        assert_eq!(RatingSortField::parse("rating"), Some(RatingSortField::Rating));
        assert_eq!(RatingSortField::parse("updated_at"), Some(RatingSortField::UpdatedAt));
        assert_eq!(RatingSortField::parse("user_id"), None);
        assert_eq!(RatingSortField::parse("rating; DROP TABLE ratings"), None);
    }

    #[test]
    fn test_store_sort_allow_list() {
        assert_eq!(StoreSortField::parse("address"), Some(StoreSortField::Address));
        assert_eq!(StoreSortField::parse("email"), None);
    }

    #[test]
    fn test_user_sort_allow_list() {
        assert_eq!(UserSortField::parse("role"), Some(UserSortField::Role));
        assert_eq!(UserSortField::parse("password"), None);
    }

    #[test]
    fn test_blank_filters_are_dropped() {
        let filter = UserFilter {
            name: Some("   ".to_string()),
            email: Some(" Bob ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(filter.name, None);
        assert_eq!(filter.email.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_empty_id_lists_match_nothing() {
        let filter = RatingFilter {
            user_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(filter.matches_nothing());
        assert!(!RatingFilter::default().matches_nothing());
        assert!(StoreFilter {
            owner_ids: Some(vec![]),
            ..Default::default()
        }
        .matches_nothing());
    }
}
