use serde::Deserialize;

use sr_core::domain::entities::{RatingValue, Role};
use sr_core::domain::value_objects::{StoreFilter, UserFilter};
use sr_core::services::{AdminStoreSearch, RatingSearch};
use sr_shared::types::{Pagination, Sort, SortField, SortOrder};

use crate::handlers::{ApiError, ApiResult};

/// Query string shared by every list endpoint.
///
/// Each endpoint reads the filters it understands and ignores the rest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,

    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
    /// Kept as text so an out-of-range value gets a specific message
    pub rating: Option<String>,
    pub owner_name: Option<String>,
    pub user_name: Option<String>,
    pub store_name: Option<String>,
}

impl ListQuery {
    pub fn pagination(&self, default_limit: u32) -> Pagination {
        Pagination::from_query(self.page, self.limit, default_limit)
    }

    pub fn sort<F: SortField>(&self, default_field: F, default_order: SortOrder) -> Sort<F> {
        Sort::resolve(
            self.sort_by.as_deref(),
            self.sort_order.as_deref(),
            default_field,
            default_order,
        )
    }

    pub fn user_filter(&self) -> ApiResult<UserFilter> {
        let role = match blank_to_none(&self.role) {
            Some(role) => Some(role.parse::<Role>().map_err(|_| {
                ApiError::bad_request(
                    "Invalid role filter. Must be system_admin, normal_user, or store_owner",
                )
            })?),
            None => None,
        };

        Ok(UserFilter {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            role,
        }
        .normalized())
    }

    pub fn store_filter(&self) -> StoreFilter {
        StoreFilter {
            name: self.name.clone(),
            address: self.address.clone(),
            owner_ids: None,
        }
        .normalized()
    }

    pub fn admin_store_search(&self) -> AdminStoreSearch {
        AdminStoreSearch {
            name: self.name.clone(),
            address: self.address.clone(),
            owner_name: self.owner_name.clone(),
        }
    }

    pub fn rating_search(&self) -> ApiResult<RatingSearch> {
        Ok(RatingSearch {
            rating: self.rating_value()?,
            user_name: self.user_name.clone(),
            store_name: self.store_name.clone(),
        })
    }

    fn rating_value(&self) -> ApiResult<Option<RatingValue>> {
        let Some(raw) = blank_to_none(&self.rating) else {
            return Ok(None);
        };

        raw.parse::<i64>()
            .ok()
            .and_then(|n| RatingValue::new(n).ok())
            .map(Some)
            .ok_or_else(|| ApiError::bad_request("Invalid rating filter. Must be between 1 and 5"))
    }
}

fn blank_to_none(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::domain::value_objects::UserSortField;

    fn query(pairs: &str) -> ListQuery {
        serde_json::from_str(pairs).unwrap()
    }

    #[test]
    fn test_defaults() {
        let q = ListQuery::default();
        assert_eq!(q.pagination(12), Pagination::new(1, 12));
        let sort = q.sort(UserSortField::Name, SortOrder::Asc);
        assert_eq!(sort.to_sql(), "name ASC");
    }

    #[test]
    fn test_unknown_sort_field_falls_back() {
        let q = query(r#"{"sortBy": "password", "sortOrder": "desc"}"#);
        let sort = q.sort(UserSortField::Name, SortOrder::Asc);
        assert_eq!(sort.field, UserSortField::Name);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_role_filter() {
        let q = query(r#"{"role": "store_owner"}"#);
        assert_eq!(q.user_filter().unwrap().role, Some(Role::StoreOwner));

        let bad = query(r#"{"role": "superuser"}"#);
        assert!(bad.user_filter().is_err());

        let blank = query(r#"{"role": ""}"#);
        assert_eq!(blank.user_filter().unwrap().role, None);
    }

    #[test]
    fn test_rating_filter() {
        let q = query(r#"{"rating": "4"}"#);
        assert_eq!(q.rating_search().unwrap().rating.map(|r| r.get()), Some(4));

        for bad in ["0", "6", "abc", "4.5"] {
            let q = ListQuery {
                rating: Some(bad.to_string()),
                ..Default::default()
            };
            assert!(q.rating_search().is_err(), "{bad} should be rejected");
        }
    }
}
