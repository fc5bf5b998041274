//! Dashboard statistics over users, stores and ratings

use chrono::{Duration, Utc};
use sr_shared::config::ReportingConfig;
use std::sync::Arc;

use crate::domain::entities::rating::{MAX_RATING, MIN_RATING};
use crate::domain::entities::user::Role;
use crate::domain::value_objects::{
    AverageRating, DashboardOverview, DashboardRatingStats, DashboardStats, DashboardStoreStats,
    DashboardUserStats, OverallRating, RatingBucket, RatingFilter, RoleCount, TopRatedStore,
};
use crate::errors::DomainResult;
use crate::repositories::{RatingRepository, StoreRepository, UserRepository};
use crate::services::lookup::stores_by_id;

/// Number of stores in the dashboard's top-rated ranking
const TOP_RATED_LIMIT: u32 = 5;

/// Read-only aggregation for the administrator dashboard
pub struct AdminService<U, S, R>
where
    U: UserRepository,
    S: StoreRepository,
    R: RatingRepository,
{
    user_repository: Arc<U>,
    store_repository: Arc<S>,
    rating_repository: Arc<R>,
    reporting: ReportingConfig,
}

impl<U, S, R> AdminService<U, S, R>
where
    U: UserRepository,
    S: StoreRepository,
    R: RatingRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        store_repository: Arc<S>,
        rating_repository: Arc<R>,
        reporting: ReportingConfig,
    ) -> Self {
        Self {
            user_repository,
            store_repository,
            rating_repository,
            reporting,
        }
    }

    /// Totals, role distribution, recent activity, top stores and the
    /// rating histogram.
    ///
    /// "Recent" means the trailing `recent_activity_days` window.
    pub async fn dashboard(&self) -> DomainResult<DashboardStats> {
        let since = Utc::now() - Duration::days(self.reporting.recent_activity_days);

        let total_users = self.user_repository.count().await?;
        let total_stores = self.store_repository.count().await?;
        let overall = self.rating_repository.aggregate(&RatingFilter::default()).await?;
        let average = AverageRating::from_mean(overall.mean);

        let mut by_role = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            let count = self.user_repository.count_by_role(role).await?;
            by_role.push(RoleCount { role, count });
        }
        let recent_signups = self.user_repository.count_created_since(since).await?;

        let recently_added = self.store_repository.count_created_since(since).await?;
        let top_rated = self.top_rated().await?;

        let recently_submitted = self
            .rating_repository
            .aggregate(&RatingFilter {
                created_since: Some(since),
                ..Default::default()
            })
            .await?
            .count;
        let counts = self.rating_repository.distribution().await?;
        let distribution = (MIN_RATING..=MAX_RATING)
            .map(|rating| RatingBucket {
                rating,
                count: counts
                    .iter()
                    .find(|(value, _)| *value == rating)
                    .map(|(_, count)| *count)
                    .unwrap_or(0),
            })
            .collect();

        tracing::debug!(total_users, total_stores, total_ratings = overall.count, "dashboard computed");

        Ok(DashboardStats {
            overview: DashboardOverview {
                total_users,
                total_stores,
                total_ratings: overall.count,
                average_rating: average,
            },
            user_stats: DashboardUserStats {
                by_role,
                recent_signups,
            },
            store_stats: DashboardStoreStats {
                total: total_stores,
                recently_added,
                top_rated,
            },
            rating_stats: DashboardRatingStats {
                total: overall.count,
                recently_submitted,
                distribution,
                overall: OverallRating {
                    average,
                    min: overall.min.unwrap_or(0),
                    max: overall.max.unwrap_or(0),
                },
            },
            recent_window_days: self.reporting.recent_activity_days,
        })
    }

    async fn top_rated(&self) -> DomainResult<Vec<TopRatedStore>> {
        let ranked = self.rating_repository.top_rated_stores(TOP_RATED_LIMIT).await?;
        let ids: Vec<_> = ranked.iter().map(|(id, _)| *id).collect();
        let stores = stores_by_id(self.store_repository.as_ref(), &ids).await?;

        Ok(ranked
            .into_iter()
            .filter_map(|(id, summary)| {
                stores.get(&id).map(|store| TopRatedStore {
                    id,
                    name: store.name.clone(),
                    average_rating: summary.average_rating,
                    total_ratings: summary.total_ratings,
                })
            })
            .collect())
    }
}
