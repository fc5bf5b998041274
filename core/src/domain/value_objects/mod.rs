//! Value objects and read models

pub mod auth_response;
pub mod average;
pub mod query;
pub mod statistics;
pub mod views;

pub use auth_response::AuthResponse;
pub use average::{one_decimal, AverageRating};
pub use query::{
    non_blank, RatingFilter, RatingSortField, StoreFilter, StoreSortField, UserFilter,
    UserSortField,
};
pub use statistics::{
    DashboardOverview, DashboardRatingStats, DashboardStats, DashboardStoreStats,
    DashboardUserStats, OverallRating, RatingAggregate, RatingBucket, RatingStatistics,
    RoleCount, StoreRatingSummary, TopRatedStore, UserActivityStats,
};
pub use views::{
    RatingEntry, RatingPage, StoreListing, StorePage, StoreRatingsReport, StoreReference,
    StoreWithStats, UserPage, UserProfile,
};
