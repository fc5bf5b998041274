//! In-memory implementation of StoreRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sr_shared::types::{Page, Pagination, Sort};
use sr_shared::validation::contains_ignore_case;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::store::Store;
use crate::domain::value_objects::{StoreFilter, StoreSortField};
use crate::errors::DomainError;

use super::trait_::StoreRepository;

/// Mock store repository for testing
#[derive(Clone)]
pub struct MockStoreRepository {
    stores: Arc<RwLock<HashMap<Uuid, Store>>>,
}

impl MockStoreRepository {
    pub fn new() -> Self {
        Self {
            stores: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn matches(store: &Store, filter: &StoreFilter) -> bool {
        filter
            .name
            .as_ref()
            .map_or(true, |needle| contains_ignore_case(&store.name, needle))
            && filter
                .address
                .as_ref()
                .map_or(true, |needle| contains_ignore_case(&store.address, needle))
            && filter
                .owner_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&store.owner_id))
    }

    fn compare(a: &Store, b: &Store, field: StoreSortField) -> Ordering {
        match field {
            StoreSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            StoreSortField::Address => a.address.to_lowercase().cmp(&b.address.to_lowercase()),
            StoreSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

impl Default for MockStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreRepository for MockStoreRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Store>, DomainError> {
        let stores = self.stores.read().await;
        Ok(ids.iter().filter_map(|id| stores.get(id).cloned()).collect())
    }

    async fn create(&self, store: Store) -> Result<Store, DomainError> {
        let mut stores = self.stores.write().await;

        if stores.values().any(|s| s.email.eq_ignore_ascii_case(&store.email)) {
            return Err(DomainError::conflict("Store with this email already exists"));
        }

        stores.insert(store.id, store.clone());
        Ok(store)
    }

    async fn update(&self, store: Store) -> Result<Store, DomainError> {
        let mut stores = self.stores.write().await;

        if !stores.contains_key(&store.id) {
            return Err(DomainError::not_found("Store"));
        }
        if stores
            .values()
            .any(|s| s.id != store.id && s.email.eq_ignore_ascii_case(&store.email))
        {
            return Err(DomainError::conflict("Store with this email already exists"));
        }

        stores.insert(store.id, store.clone());
        Ok(store)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut stores = self.stores.write().await;
        Ok(stores.remove(&id).is_some())
    }

    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores
            .values()
            .any(|s| Some(s.id) != excluding && s.email.eq_ignore_ascii_case(email)))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Store>, DomainError> {
        let stores = self.stores.read().await;
        let mut owned: Vec<Store> = stores
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn count_by_owner(&self, owner_id: Uuid) -> Result<u64, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.values().filter(|s| s.owner_id == owner_id).count() as u64)
    }

    async fn list(
        &self,
        filter: &StoreFilter,
        sort: Sort<StoreSortField>,
        pagination: Pagination,
    ) -> Result<Page<Store>, DomainError> {
        let stores = self.stores.read().await;
        let mut matched: Vec<Store> = stores
            .values()
            .filter(|s| Self::matches(s, filter))
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
        let stores = self.stores.read().await;
        Ok(stores
            .values()
            .filter(|s| contains_ignore_case(&s.name, fragment))
            .map(|s| s.id)
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.len() as u64)
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let stores = self.stores.read().await;
        Ok(stores.values().filter(|s| s.created_at >= since).count() as u64)
    }
}
