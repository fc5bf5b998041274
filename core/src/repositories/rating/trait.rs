//! Rating repository trait.
//!
//! Besides plain persistence this is where rating aggregates are computed,
//! so that averages always reflect the live set of ratings.

use async_trait::async_trait;
use sr_shared::types::{Page, Pagination, Sort};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::entities::rating::Rating;
use crate::domain::value_objects::{
    RatingAggregate, RatingFilter, RatingSortField, StoreRatingSummary,
};
use crate::errors::DomainError;

/// Repository trait for Rating persistence and aggregation
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError>;

    /// The rating `user_id` left on `store_id`, if any
    async fn find_by_user_and_store(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> Result<Option<Rating>, DomainError>;

    /// Persist a new rating
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The user already rated this store
    async fn create(&self, rating: Rating) -> Result<Rating, DomainError>;

    async fn update(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Delete a rating, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete every rating of a store, returning how many were removed
    async fn delete_by_store(&self, store_id: Uuid) -> Result<u64, DomainError>;

    /// Delete every rating by a user, returning how many were removed
    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError>;

    /// Filtered, sorted page of ratings
    async fn list(
        &self,
        filter: &RatingFilter,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> Result<Page<Rating>, DomainError>;

    /// Every rating of a store, newest first
    async fn find_by_store(&self, store_id: Uuid) -> Result<Vec<Rating>, DomainError>;

    /// The ratings `user_id` left on any of `store_ids`
    async fn find_by_user_for_stores(
        &self,
        user_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Vec<Rating>, DomainError>;

    /// Count, mean, min, max and distinct stores over the matching ratings
    async fn aggregate(&self, filter: &RatingFilter) -> Result<RatingAggregate, DomainError>;

    /// Average and count per store. Stores without ratings are absent from the map.
    async fn store_summaries(
        &self,
        store_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, StoreRatingSummary>, DomainError>;

    /// Number of ratings per star value. Values nobody used are absent.
    async fn distribution(&self) -> Result<Vec<(u8, u64)>, DomainError>;

    /// Stores with at least one rating, best average first
    async fn top_rated_stores(
        &self,
        limit: u32,
    ) -> Result<Vec<(Uuid, StoreRatingSummary)>, DomainError>;
}
