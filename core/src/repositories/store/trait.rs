//! Store repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sr_shared::types::{Page, Pagination, Sort};
use uuid::Uuid;

use crate::domain::entities::store::Store;
use crate::domain::value_objects::{StoreFilter, StoreSortField};
use crate::errors::DomainError;

/// Repository trait for Store persistence.
///
/// Store emails are unique; implementations report a violation as
/// [`DomainError::Conflict`].
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, DomainError>;

    /// Fetch every store whose id is in `ids`, in no particular order
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Store>, DomainError>;

    async fn create(&self, store: Store) -> Result<Store, DomainError>;

    async fn update(&self, store: Store) -> Result<Store, DomainError>;

    /// Delete a store, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Whether `email` is used by a store other than `excluding`
    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError>;

    /// All stores owned by `owner_id`, newest first
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Store>, DomainError>;

    /// Number of stores owned by `owner_id`
    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DomainError>;

    /// Filtered, sorted page of stores
    async fn list(
        &self,
        filter: &StoreFilter,
        sort: Sort<StoreSortField>,
        pagination: Pagination,
    ) -> Result<Page<Store>, DomainError>;

    /// Ids of stores whose name contains `fragment`, ignoring case
    async fn find_ids_by_name(&self, fragment: &str) -> Result<Vec<Uuid>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Number of stores created at or after `since`
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError>;
}
