//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sr_shared::types::{Page, Pagination, Sort};
use sr_shared::validation::contains_ignore_case;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{UserFilter, UserSortField};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository seeded with `users`
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().map(|u| (u.id, u)).collect())),
        }
    }

    fn matches(user: &User, filter: &UserFilter) -> bool {
        let text = |value: Option<&str>, needle: &Option<String>| match needle {
            Some(needle) => value.map_or(false, |v| contains_ignore_case(v, needle)),
            None => true,
        };

        text(Some(&user.name), &filter.name)
            && text(Some(&user.email), &filter.email)
            && text(user.address.as_deref(), &filter.address)
            && filter.role.map_or(true, |role| user.role == role)
    }

    fn compare(a: &User, b: &User, field: UserSortField) -> Ordering {
        match field {
            UserSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            UserSortField::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            UserSortField::Address => a.address.cmp(&b.address),
            UserSortField::Role => a.role.as_str().cmp(b.role.as_str()),
            UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(DomainError::conflict("User with this email already exists"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(DomainError::conflict("User with this email already exists"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|u| Some(u.id) != excluding && u.email.eq_ignore_ascii_case(email)))
    }

    async fn list(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Page<User>, DomainError> {
        let users = self.users.read().await;
        let mut matched: Vec<User> = users
            .values()
            .filter(|u| Self::matches(u, filter))
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            sort.order
                .apply(Self::compare(a, b, sort.field))
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matched.len() as u64;
        Ok(Page::new(pagination.slice(matched), total))
    }

    async fn find_ids_by_name(&self, fragment: &str) -> Result<Vec<Uuid>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|u| contains_ignore_case(&u.name, fragment))
            .map(|u| u.id)
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.len() as u64)
    }

    async fn count_by_role(&self, role: Role) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.role == role).count() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.created_at >= since).count() as u64)
    }
}
