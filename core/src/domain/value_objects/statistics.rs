//! Aggregate statistics over ratings, users and stores.

use serde::Serialize;
use uuid::Uuid;

use super::average::AverageRating;
use super::views::RatingEntry;
use crate::domain::entities::Role;

/// Raw aggregate over a set of ratings, as computed by storage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingAggregate {
    pub count: u64,
    /// Unrounded mean, `None` for an empty set
    pub mean: Option<f64>,
    pub min: Option<u8>,
    pub max: Option<u8>,
    pub distinct_stores: u64,
}

/// Average and count of one store's ratings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRatingSummary {
    pub average_rating: AverageRating,
    pub total_ratings: u64,
}

/// Public statistics block: `{averageRating, totalRatings, minRating, maxRating}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingStatistics {
    pub average_rating: AverageRating,
    pub total_ratings: u64,
    pub min_rating: u8,
    pub max_rating: u8,
}

impl From<RatingAggregate> for RatingStatistics {
    fn from(aggregate: RatingAggregate) -> Self {
        Self {
            average_rating: AverageRating::from_mean(aggregate.mean),
            total_ratings: aggregate.count,
            min_rating: aggregate.min.unwrap_or(0),
            max_rating: aggregate.max.unwrap_or(0),
        }
    }
}

/// Number of users holding a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: Role,
    pub count: u64,
}

/// Number of ratings with a given star value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingBucket {
    pub rating: u8,
    pub count: u64,
}

/// A store ranked by its average rating
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopRatedStore {
    pub id: Uuid,
    pub name: String,
    pub average_rating: AverageRating,
    pub total_ratings: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub total_users: u64,
    pub total_stores: u64,
    pub total_ratings: u64,
    pub average_rating: AverageRating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUserStats {
    pub by_role: Vec<RoleCount>,
    pub recent_signups: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStoreStats {
    pub total: u64,
    pub recently_added: u64,
    pub top_rated: Vec<TopRatedStore>,
}

/// Overall average, min and max across every rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallRating {
    pub average: AverageRating,
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRatingStats {
    pub total: u64,
    pub recently_submitted: u64,
    pub distribution: Vec<RatingBucket>,
    pub overall: OverallRating,
}

/// Everything the admin dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub overview: DashboardOverview,
    pub user_stats: DashboardUserStats,
    pub store_stats: DashboardStoreStats,
    pub rating_stats: DashboardRatingStats,
    /// Length of the "recent" window in days
    pub recent_window_days: i64,
}

/// A user's own rating activity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActivityStats {
    pub total_ratings: u64,
    pub total_stores_rated: u64,
    /// Mean of the user's ratings with one decimal, e.g. `"4.5"`
    pub average_rating_given: String,
    pub ratings_this_month: u64,
    pub favorite_stores: Vec<RatingEntry>,
    pub latest_ratings: Vec<RatingEntry>,
}
