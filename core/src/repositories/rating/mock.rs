//! In-memory implementation of RatingRepository

use async_trait::async_trait;
use sr_shared::types::{Page, Pagination, Sort};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::rating::Rating;
use crate::domain::value_objects::{
    AverageRating, RatingAggregate, RatingFilter, RatingSortField, StoreRatingSummary,
};
use crate::errors::DomainError;

use super::trait_::RatingRepository;

/// Mock rating repository for testing
#[derive(Clone)]
pub struct MockRatingRepository {
    ratings: Arc<RwLock<HashMap<Uuid, Rating>>>,
}

impl MockRatingRepository {
    pub fn new() -> Self {
        Self {
            ratings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn matches(rating: &Rating, filter: &RatingFilter) -> bool {
        filter.user_id.map_or(true, |id| rating.user_id == id)
            && filter.store_id.map_or(true, |id| rating.store_id == id)
            && filter.rating.map_or(true, |value| rating.rating == value)
            && filter
                .user_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&rating.user_id))
            && filter
                .store_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&rating.store_id))
            && filter
                .created_since
                .map_or(true, |since| rating.created_at >= since)
    }

    fn compare(a: &Rating, b: &Rating, field: RatingSortField) -> Ordering {
        match field {
            RatingSortField::Rating => a.rating.cmp(&b.rating),
            RatingSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            RatingSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }

    fn summarize<'a>(ratings: impl Iterator<Item = &'a Rating>) -> StoreRatingSummary {
        let (sum, count) = ratings.fold((0u64, 0u64), |(sum, count), r| {
            (sum + u64::from(r.rating.get()), count + 1)
        });
        StoreRatingSummary {
            average_rating: AverageRating::from_sum(sum, count),
            total_ratings: count,
        }
    }
}

impl Default for MockRatingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RatingRepository for MockRatingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings.get(&id).cloned())
    }

    async fn find_by_user_and_store(
        &self,
        user_id: Uuid,
        store_id: Uuid,
    ) -> Result<Option<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .values()
            .find(|r| r.user_id == user_id && r.store_id == store_id)
            .cloned())
    }

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;

        if ratings
            .values()
            .any(|r| r.user_id == rating.user_id && r.store_id == rating.store_id)
        {
            return Err(DomainError::conflict("Rating already exists for this user and store"));
        }

        ratings.insert(rating.id, rating.clone());
        Ok(rating)
    }

    async fn update(&self, rating: Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;

        if !ratings.contains_key(&rating.id) {
            return Err(DomainError::not_found("Rating"));
        }

        ratings.insert(rating.id, rating.clone());
        Ok(rating)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut ratings = self.ratings.write().await;
        Ok(ratings.remove(&id).is_some())
    }

    async fn delete_by_store(&self, store_id: Uuid) -> Result<u64, DomainError> {
        let mut ratings = self.ratings.write().await;
        let before = ratings.len();
        ratings.retain(|_, r| r.store_id != store_id);
        Ok((before - ratings.len()) as u64)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<u64, DomainError> {
        let mut ratings = self.ratings.write().await;
        let before = ratings.len();
        ratings.retain(|_, r| r.user_id != user_id);
        Ok((before - ratings.len()) as u64)
    }

    async fn list(
        &self,
        filter: &RatingFilter,
        sort: Sort<RatingSortField>,
        pagination: Pagination,
    ) -> Result<Page<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut matched: Vec<Rating> = ratings
            .values()
            .filter(|r| Self::matches(r, filter))
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

    async fn find_by_store(&self, store_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut matched: Vec<Rating> = ratings
            .values()
            .filter(|r| r.store_id == store_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(matched)
    }

    async fn find_by_user_for_stores(
        &self,
        user_id: Uuid,
        store_ids: &[Uuid],
    ) -> Result<Vec<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .values()
            .filter(|r| r.user_id == user_id && store_ids.contains(&r.store_id))
            .cloned()
            .collect())
    }

    async fn aggregate(&self, filter: &RatingFilter) -> Result<RatingAggregate, DomainError> {
        let ratings = self.ratings.read().await;
        let matched: Vec<&Rating> = ratings.values().filter(|r| Self::matches(r, filter)).collect();

        if matched.is_empty() {
            return Ok(RatingAggregate::default());
        }

        let count = matched.len() as u64;
        let sum: u64 = matched.iter().map(|r| u64::from(r.rating.get())).sum();
        let stores: HashSet<Uuid> = matched.iter().map(|r| r.store_id).collect();

        Ok(RatingAggregate {
            count,
            mean: Some(sum as f64 / count as f64),
            min: matched.iter().map(|r| r.rating.get()).min(),
            max: matched.iter().map(|r| r.rating.get()).max(),
            distinct_stores: stores.len() as u64,
        })
    }

    async fn store_summaries(
        &self,
        store_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, StoreRatingSummary>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut summaries = HashMap::new();

        for store_id in store_ids {
            let mut of_store = ratings.values().filter(|r| r.store_id == *store_id).peekable();
            if of_store.peek().is_some() {
                summaries.insert(*store_id, Self::summarize(of_store));
            }
        }

        Ok(summaries)
    }

    async fn distribution(&self) -> Result<Vec<(u8, u64)>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut buckets: BTreeMap<u8, u64> = BTreeMap::new();
        for rating in ratings.values() {
            *buckets.entry(rating.rating.get()).or_default() += 1;
        }
        Ok(buckets.into_iter().collect())
    }

    async fn top_rated_stores(
        &self,
        limit: u32,
    ) -> Result<Vec<(Uuid, StoreRatingSummary)>, DomainError> {
        let ratings = self.ratings.read().await;
        let mut by_store: HashMap<Uuid, Vec<&Rating>> = HashMap::new();
        for rating in ratings.values() {
            by_store.entry(rating.store_id).or_default().push(rating);
        }

        let mut ranked: Vec<(Uuid, StoreRatingSummary)> = by_store
            .into_iter()
            .map(|(store_id, rs)| (store_id, Self::summarize(rs.into_iter())))
            .collect();

        ranked.sort_by(|(a_id, a), (b_id, b)| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.total_ratings.cmp(&a.total_ratings))
                .then_with(|| a_id.cmp(b_id))
        });
        ranked.truncate(limit as usize);

        Ok(ranked)
    }
}
