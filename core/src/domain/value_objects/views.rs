//! Read models returned by the domain services.
//!
//! Entity fields keep their storage names (`owner_id`, `created_at`);
//! computed fields use camelCase (`averageRating`, `userRating`).

use serde::Serialize;
use sr_shared::types::PaginationMeta;
use uuid::Uuid;

use super::average::AverageRating;
use super::statistics::{RatingStatistics, StoreRatingSummary};
use crate::domain::entities::{Rating, RatingValue, Store, StoreSummary, User, UserSummary};

/// A store as seen by a browsing user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreListing {
    #[serde(flatten)]
    pub store: Store,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
    pub average_rating: AverageRating,
    pub total_ratings: u64,
    /// The caller's own star value for this store, if they rated it
    pub user_rating: Option<RatingValue>,
    pub user_rating_id: Option<Uuid>,
}

impl StoreListing {
    pub fn new(store: Store, summary: StoreRatingSummary, own: Option<&Rating>) -> Self {
        Self {
            store,
            owner: None,
            average_rating: summary.average_rating,
            total_ratings: summary.total_ratings,
            user_rating: own.map(|r| r.rating),
            user_rating_id: own.map(|r| r.id),
        }
    }

    pub fn with_owner(mut self, owner: Option<UserSummary>) -> Self {
        self.owner = owner;
        self
    }
}

/// A store with its rating statistics, as seen by owners and admins
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreWithStats {
    #[serde(flatten)]
    pub store: Store,
    pub average_rating: AverageRating,
    pub total_ratings: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<Vec<RatingEntry>>,
}

impl StoreWithStats {
    pub fn new(store: Store, summary: StoreRatingSummary) -> Self {
        Self {
            store,
            average_rating: summary.average_rating,
            total_ratings: summary.total_ratings,
            owner: None,
            ratings: None,
        }
    }
}

/// Store reference embedded in a rating
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreReference {
    #[serde(flatten)]
    pub summary: StoreSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<AverageRating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserSummary>,
}

impl StoreReference {
    pub fn new(store: &Store) -> Self {
        Self {
            summary: store.summary(),
            average_rating: None,
            owner: None,
        }
    }

    pub fn with_average(mut self, average: AverageRating) -> Self {
        self.average_rating = Some(average);
        self
    }

    pub fn with_owner(mut self, owner: Option<UserSummary>) -> Self {
        self.owner = owner;
        self
    }
}

/// A rating with whichever related records the operation embeds
#[derive(Debug, Clone, Serialize)]
pub struct RatingEntry {
    #[serde(flatten)]
    pub rating: Rating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<StoreReference>,
}

impl RatingEntry {
    pub fn new(rating: Rating) -> Self {
        Self {
            rating,
            user: None,
            store: None,
        }
    }

    pub fn with_user(mut self, user: Option<UserSummary>) -> Self {
        self.user = user;
        self
    }

    pub fn with_store(mut self, store: Option<StoreReference>) -> Self {
        self.store = store;
        self
    }
}

/// A user together with the stores they own
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub owned_stores: Vec<StoreWithStats>,
}

/// One page of users
#[derive(Debug, Clone, Serialize)]
pub struct UserPage<T> {
    pub users: Vec<T>,
    pub pagination: PaginationMeta,
}

/// One page of stores
#[derive(Debug, Clone, Serialize)]
pub struct StorePage<T> {
    pub stores: Vec<T>,
    pub pagination: PaginationMeta,
}

/// One page of ratings, optionally with statistics over the whole result set
#[derive(Debug, Clone, Serialize)]
pub struct RatingPage {
    pub ratings: Vec<RatingEntry>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<RatingStatistics>,
}

/// Ratings of a single store with its statistics
#[derive(Debug, Clone, Serialize)]
pub struct StoreRatingsReport {
    pub store: StoreReference,
    pub ratings: Vec<RatingEntry>,
    pub statistics: RatingStatistics,
    pub pagination: PaginationMeta,
}
