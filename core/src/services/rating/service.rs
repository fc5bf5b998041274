//! Rating service implementation

use sr_shared::types::{Page, Pagination, PaginationMeta, Sort};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rating::{Rating, RatingValue};
use crate::domain::entities::user::Role;
use crate::domain::value_objects::{
    RatingEntry, RatingFilter, RatingPage, RatingSortField, RatingStatistics, StoreRatingsReport,
    StoreReference,
};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RatingRepository, StoreRepository, UserRepository};
use crate::services::authorization::Caller;
use crate::services::lookup::{stores_by_id, unique_ids, users_by_id};

use super::types::RatingSearch;

const ALREADY_RATED: &str = "You have already rated this store. Use update to modify your rating.";

/// Service owning the one-rating-per-user-per-store rule and rating listings
pub struct RatingService<R, S, U>
where
    R: RatingRepository,
    S: StoreRepository,
    U: UserRepository,
{
    rating_repository: Arc<R>,
    store_repository: Arc<S>,
    user_repository: Arc<U>,
}

impl<R, S, U> RatingService<R, S, U>
where
    R: RatingRepository,
    S: StoreRepository,
    U: UserRepository,
{
    pub fn new(rating_repository: Arc<R>, store_repository: Arc<S>, user_repository: Arc<U>) -> Self {
        Self {
            rating_repository,
            store_repository,
            user_repository,
        }
    }

    /// Rate a store for the first time
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - The store does not exist
    /// * `Err(DomainError::BusinessRule)` - The user already rated this store
    pub async fn submit(
        &self,
        user_id: Uuid,
        store_id: Uuid,
        value: RatingValue,
    ) -> DomainResult<Rating> {
        if self.store_repository.find_by_id(store_id).await?.is_none() {
            return Err(DomainError::not_found("Store"));
        }

        if self
            .rating_repository
            .find_by_user_and_store(user_id, store_id)
            .await?
            .is_some()
        {
            return Err(DomainError::business_rule(ALREADY_RATED));
        }

        // The unique (user, store) index is authoritative if two submissions race
        let rating = self
            .rating_repository
            .create(Rating::new(user_id, store_id, value))
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => DomainError::business_rule(ALREADY_RATED),
                other => other,
            })?;

        tracing::info!(rating_id = %rating.id, %user_id, %store_id, value = %value, "rating submitted");
        Ok(rating)
    }

    /// Change the value of the caller's own rating
    pub async fn update(
        &self,
        user_id: Uuid,
        rating_id: Uuid,
        value: RatingValue,
    ) -> DomainResult<Rating> {
        let mut rating = self
            .owned_rating(user_id, rating_id, "You can only update your own ratings")
            .await?;

        rating.set_rating(value);
        self.rating_repository.update(rating).await
    }

    /// Remove the caller's own rating
    pub async fn delete(&self, user_id: Uuid, rating_id: Uuid) -> DomainResult<()> {
        self.owned_rating(user_id, rating_id, "You can only delete your own ratings")
            .await?;

        if !self.rating_repository.delete(rating_id).await? {
            return Err(DomainError::not_found("Rating"));
        }

        tracing::info!(%rating_id, %user_id, "rating deleted");
        Ok(())
    }

    async fn owned_rating(
        &self,
        user_id: Uuid,
        rating_id: Uuid,
        denied: &str,
    ) -> DomainResult<Rating> {
        let rating = self
            .rating_repository
            .find_by_id(rating_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Rating"))?;

        if !rating.is_owned_by(user_id) {
            return Err(DomainError::forbidden(denied));
        }

        Ok(rating)
    }

    /// The caller's ratings, each with its store and the store's live average
    pub async fn list_mine(
        &self,
        user_id: Uuid,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> DomainResult<RatingPage> {
        let page = self
            .rating_repository
            .list(&RatingFilter::for_user(user_id), sort, pagination)
            .await?;

        let store_ids = unique_ids(page.items.iter().map(|r| r.store_id));
        let stores = stores_by_id(self.store_repository.as_ref(), &store_ids).await?;
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;

        let total = page.total;
        let ratings = page
            .items
            .into_iter()
            .map(|rating| {
                let store = stores.get(&rating.store_id).map(|store| {
                    let average = summaries
                        .get(&store.id)
                        .map(|s| s.average_rating)
                        .unwrap_or_default();
                    StoreReference::new(store).with_average(average)
                });
                RatingEntry::new(rating).with_store(store)
            })
            .collect();

        Ok(RatingPage {
            ratings,
            pagination: PaginationMeta::new(pagination, total),
            statistics: None,
        })
    }

    /// Ratings of one store with its statistics.
    ///
    /// A store owner may only look at stores they own.
    pub async fn list_for_store(
        &self,
        store_id: Uuid,
        caller: &Caller,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> DomainResult<StoreRatingsReport> {
        let store = self
            .store_repository
            .find_by_id(store_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Store"))?;

        if caller.role == Role::StoreOwner && store.owner_id != caller.id {
            return Err(DomainError::forbidden(
                "You can only view ratings for your own store",
            ));
        }

        let filter = RatingFilter::for_store(store_id);
        let page = self.rating_repository.list(&filter, sort, pagination).await?;
        let aggregate = self.rating_repository.aggregate(&filter).await?;

        let user_ids = unique_ids(
            page.items
                .iter()
                .map(|r| r.user_id)
                .chain(std::iter::once(store.owner_id)),
        );
        let users = users_by_id(self.user_repository.as_ref(), &user_ids).await?;

        let reference = StoreReference::new(&store)
            .with_owner(users.get(&store.owner_id).map(|owner| owner.summary()));
        let total = page.total;
        let ratings = page
            .items
            .into_iter()
            .map(|rating| {
                let user = users.get(&rating.user_id).map(|u| u.summary());
                RatingEntry::new(rating).with_user(user)
            })
            .collect();

        Ok(StoreRatingsReport {
            store: reference,
            ratings,
            statistics: RatingStatistics::from(aggregate),
            pagination: PaginationMeta::new(pagination, total),
        })
    }

    /// Every rating, with rater and store, plus statistics over all ratings
    pub async fn list_all(
        &self,
        search: RatingSearch,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> DomainResult<RatingPage> {
        let search = search.normalized();
        let mut filter = RatingFilter {
            rating: search.rating,
            ..Default::default()
        };
        if let Some(name) = &search.user_name {
            filter.user_ids = Some(self.user_repository.find_ids_by_name(name).await?);
        }
        if let Some(name) = &search.store_name {
            filter.store_ids = Some(self.store_repository.find_ids_by_name(name).await?);
        }

        let page = if filter.matches_nothing() {
            Page::empty()
        } else {
            self.rating_repository.list(&filter, sort, pagination).await?
        };
        let aggregate = self.rating_repository.aggregate(&RatingFilter::default()).await?;

        let store_ids = unique_ids(page.items.iter().map(|r| r.store_id));
        let stores = stores_by_id(self.store_repository.as_ref(), &store_ids).await?;
        let summaries = self.rating_repository.store_summaries(&store_ids).await?;
        let user_ids = unique_ids(
            page.items
                .iter()
                .map(|r| r.user_id)
                .chain(stores.values().map(|s| s.owner_id)),
        );
        let users = users_by_id(self.user_repository.as_ref(), &user_ids).await?;

        let total = page.total;
        let ratings = page
            .items
            .into_iter()
            .map(|rating| {
                let user = users.get(&rating.user_id).map(|u| u.summary_with_role());
                let store = stores.get(&rating.store_id).map(|store| {
                    StoreReference::new(store)
                        .with_average(
                            summaries
                                .get(&store.id)
                                .map(|s| s.average_rating)
                                .unwrap_or_default(),
                        )
                        .with_owner(users.get(&store.owner_id).map(|o| o.summary()))
                });
                RatingEntry::new(rating).with_user(user).with_store(store)
            })
            .collect();

        Ok(RatingPage {
            ratings,
            pagination: PaginationMeta::new(pagination, total),
            statistics: Some(RatingStatistics::from(aggregate)),
        })
    }
}
