//! Store service implementation

use sr_shared::types::{Page, Pagination, PaginationMeta, Sort, SortOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rating::Rating;
use crate::domain::entities::store::Store;
use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{
    RatingEntry, StoreFilter, StoreListing, StorePage, StoreSortField, StoreWithStats,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RatingRepository, StoreRepository, UserRepository};
use crate::services::lookup::{unique_ids, users_by_id};

use super::types::{AdminStoreSearch, NewStore, StoreChanges};

const DUPLICATE_EMAIL: &str = "Store with this email already exists";

/// Service for store browsing and management
pub struct StoreService<S, U, R>
where
    S: StoreRepository,
    U: UserRepository,
    R: RatingRepository,
{
    store_repository: Arc<S>,
    user_repository: Arc<U>,
    rating_repository: Arc<R>,
}

impl<S, U, R> StoreService<S, U, R>
where
    S: StoreRepository,
    U: UserRepository,
    R: RatingRepository,
{
    pub fn new(store_repository: Arc<S>, user_repository: Arc<U>, rating_repository: Arc<R>) -> Self {
        Self {
            store_repository,
            user_repository,
            rating_repository,
        }
    }

    /// Newest stores first, optionally filtered by name.
    ///
    /// Each entry carries its average and, when `caller_id` is given, the
    /// caller's own rating.
    pub async fn get_all(
        &self,
        caller_id: Option<Uuid>,
        name: Option<String>,
        pagination: Pagination,
    ) -> DomainResult<StorePage<StoreListing>> {
        let filter = StoreFilter {
            name,
            ..Default::default()
        }
        .normalized();
        let sort = Sort::new(StoreSortField::CreatedAt, SortOrder::Desc);

        let page = self.store_repository.list(&filter, sort, pagination).await?;
        let total = page.total;
        let stores = self.listings(page.items, caller_id, false).await?;

        Ok(StorePage {
            stores,
            pagination: PaginationMeta::new(pagination, total),
        })
    }

    /// Name and address search with owner summaries attached
    pub async fn search(
        &self,
        caller_id: Option<Uuid>,
        filter: StoreFilter,
        sort: Sort<StoreSortField>,
        pagination: Pagination,
    ) -> DomainResult<StorePage<StoreListing>> {
        let filter = StoreFilter {
            owner_ids: None,
            ..filter
        }
        .normalized();

        let page = self.store_repository.list(&filter, sort, pagination).await?;
        let total = page.total;
        let stores = self.listings(page.items, caller_id, true).await?;

        Ok(StorePage {
            stores,
            pagination: PaginationMeta::new(pagination, total),
        })
    }

    /// One store with owner, average and the caller's own rating
    pub async fn get_by_id(
        &self,
        store_id: Uuid,
        caller_id: Option<Uuid>,
    ) -> DomainResult<StoreListing> {
        let store = self.find_store(store_id).await?;
        let mut listings = self.listings(vec![store], caller_id, true).await?;
        listings
            .pop()
            .ok_or_else(|| DomainError::not_found("Store"))
    }

    /// Every store owned by `owner_id`, each with its ratings and raters
    pub async fn get_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<StoreWithStats>> {
        let stores = self.store_repository.find_by_owner(owner_id).await?;
        if stores.is_empty() {
            return Err(DomainError::not_found_message("No store found for this owner"));
        }

        let store_ids: Vec<Uuid> = stores.iter().map(|s| s.id).collect();
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;

        let mut ratings_by_store = Vec::with_capacity(stores.len());
        for store in &stores {
            ratings_by_store.push(self.rating_repository.find_by_store(store.id).await?);
        }
        let rater_ids = unique_ids(ratings_by_store.iter().flatten().map(|r| r.user_id));
        let raters = users_by_id(self.user_repository.as_ref(), &rater_ids).await?;

        Ok(stores
            .into_iter()
            .zip(ratings_by_store)
            .map(|(store, ratings)| {
                let summary = summaries.get(&store.id).copied().unwrap_or_default();
                let entries = ratings
                    .into_iter()
                    .map(|rating| {
                        let user = raters.get(&rating.user_id).map(|u| u.summary());
                        RatingEntry::new(rating).with_user(user)
                    })
                    .collect();
                let mut view = StoreWithStats::new(store, summary);
                view.ratings = Some(entries);
                view
            })
            .collect())
    }

    /// Create a store for an existing `store_owner`
    ///
    /// The owner's role is read and the store written in separate round
    /// trips; a concurrent role change in between is not detected.
    pub async fn create(&self, input: NewStore) -> DomainResult<Store> {
        let owner = self
            .user_repository
            .find_by_id(input.owner_id)
            .await?
            .ok_or_else(|| DomainError::business_rule("Owner not found"))?;
        if owner.role != Role::StoreOwner {
            return Err(DomainError::business_rule("Owner must have store_owner role"));
        }

        if self.store_repository.email_exists(&input.email, None).await? {
            return Err(DomainError::business_rule(DUPLICATE_EMAIL));
        }

        let store = self
            .store_repository
            .create(Store::new(input.name, input.email, input.address, owner.id))
            .await
            .map_err(duplicate_email_as_business_rule)?;

        tracing::info!(store_id = %store.id, owner_id = %owner.id, "store created");
        Ok(store)
    }

    /// Apply a partial update
    pub async fn update(&self, store_id: Uuid, changes: StoreChanges) -> DomainResult<Store> {
        let mut store = self.find_store(store_id).await?;

        if let Some(email) = changes.email {
            if email != store.email
                && self
                    .store_repository
                    .email_exists(&email, Some(store.id))
                    .await?
            {
                return Err(DomainError::business_rule(DUPLICATE_EMAIL));
            }
            store.set_email(email);
        }

        if let Some(owner_id) = changes.owner_id {
            if owner_id != store.owner_id {
                let owner = self
                    .user_repository
                    .find_by_id(owner_id)
                    .await?
                    .ok_or_else(|| DomainError::business_rule("New owner not found"))?;
                if owner.role != Role::StoreOwner {
                    return Err(DomainError::business_rule(
                        "New owner must have store_owner role",
                    ));
                }
                store.set_owner(owner.id);
            }
        }

        if let Some(name) = changes.name {
            store.set_name(name);
        }
        if let Some(address) = changes.address {
            store.set_address(address);
        }

        let store = self
            .store_repository
            .update(store)
            .await
            .map_err(duplicate_email_as_business_rule)?;

        tracing::info!(store_id = %store.id, "store updated");
        Ok(store)
    }

    /// Delete a store together with its ratings
    pub async fn delete(&self, store_id: Uuid) -> DomainResult<()> {
        self.find_store(store_id).await?;

        let removed = self.rating_repository.delete_by_store(store_id).await?;
        if !self.store_repository.delete(store_id).await? {
            return Err(DomainError::not_found("Store"));
        }

        tracing::info!(%store_id, ratings_removed = removed, "store deleted");
        Ok(())
    }

    /// Administrator listing with owner and rating totals
    pub async fn list_admin(
        &self,
        search: AdminStoreSearch,
        sort: Sort<StoreSortField>,
        pagination: Pagination,
    ) -> DomainResult<StorePage<StoreWithStats>> {
        let search = search.normalized();
        let owner_ids = match &search.owner_name {
            Some(name) => Some(self.user_repository.find_ids_by_name(name).await?),
            None => None,
        };
        let filter = StoreFilter {
            name: search.name,
            address: search.address,
            owner_ids,
        };

        let page = if filter.matches_nothing() {
            Page::empty()
        } else {
            self.store_repository.list(&filter, sort, pagination).await?
        };

        let store_ids: Vec<Uuid> = page.items.iter().map(|s| s.id).collect();
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;
        let owners = self.owners_of(&page.items).await?;

        let total = page.total;
        let stores = page
            .items
            .into_iter()
            .map(|store| {
                let summary = summaries.get(&store.id).copied().unwrap_or_default();
                let owner = owners.get(&store.owner_id).map(|o| o.summary());
                let mut view = StoreWithStats::new(store, summary);
                view.owner = owner;
                view
            })
            .collect();

        Ok(StorePage {
            stores,
            pagination: PaginationMeta::new(pagination, total),
        })
    }

    async fn find_store(&self, store_id: Uuid) -> DomainResult<Store> {
        self.store_repository
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Store"))
    }

    async fn owners_of(&self, stores: &[Store]) -> DomainResult<HashMap<Uuid, User>> {
        let owner_ids = unique_ids(stores.iter().map(|s| s.owner_id));
        users_by_id(self.user_repository.as_ref(), &owner_ids).await
    }

    async fn listings(
        &self,
        stores: Vec<Store>,
        caller_id: Option<Uuid>,
        with_owner: bool,
    ) -> DomainResult<Vec<StoreListing>> {
        let store_ids: Vec<Uuid> = stores.iter().map(|s| s.id).collect();
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;

        let own_ratings: HashMap<Uuid, Rating> = match caller_id {
            Some(user_id) if !store_ids.is_empty() => self
                .rating_repository
                .find_by_user_for_stores(user_id, &store_ids)
                .await?
                .into_iter()
                .map(|r| (r.store_id, r))
                .collect(),
            _ => HashMap::new(),
        };

        let owners = if with_owner {
            self.owners_of(&stores).await?
        } else {
            HashMap::new()
        };

        Ok(stores
            .into_iter()
            .map(|store| {
                let summary = summaries.get(&store.id).copied().unwrap_or_default();
                let owner = owners.get(&store.owner_id).map(|o| o.summary());
                let own = own_ratings.get(&store.id);
                StoreListing::new(store, summary, own).with_owner(owner)
            })
            .collect())
    }
}

fn duplicate_email_as_business_rule(error: DomainError) -> DomainError {
    match error {
        DomainError::Conflict { .. } => DomainError::business_rule(DUPLICATE_EMAIL),
        other => other,
    }
}
