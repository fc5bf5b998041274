//! Unit tests for the dashboard

use sr_shared::config::ReportingConfig;

use crate::domain::entities::user::Role;
use crate::repositories::{MockRatingRepository, MockStoreRepository, MockUserRepository};
use crate::services::admin::AdminService;
use crate::services::test_support::Fixture;

type Service = AdminService<MockUserRepository, MockStoreRepository, MockRatingRepository>;

fn service(fixture: &Fixture) -> Service {
    AdminService::new(
        fixture.users.clone(),
        fixture.stores.clone(),
        fixture.ratings.clone(),
        ReportingConfig::default(),
    )
}

#[tokio::test]
async fn test_empty_dashboard() {
    let fixture = Fixture::new();
    let stats = service(&fixture).dashboard().await.unwrap();

    assert_eq!(stats.overview.total_users, 0);
    assert_eq!(stats.overview.average_rating.to_string(), "0.00");
    assert_eq!(stats.rating_stats.distribution.len(), 5);
    assert!(stats.rating_stats.distribution.iter().all(|b| b.count == 0));
    assert_eq!(stats.rating_stats.overall.min, 0);
    assert!(stats.store_stats.top_rated.is_empty());
    assert_eq!(stats.recent_window_days, 7);
}

#[tokio::test]
async fn test_dashboard_counts_and_rankings() {
    let fixture = Fixture::new();
    fixture.user("Admin", Role::SystemAdmin).await;
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let alice = fixture.user("Alice", Role::NormalUser).await;
    let bob = fixture.user("Bob", Role::NormalUser).await;
    let bakery = fixture.store("Corner Bakery", owner.id).await;
    let books = fixture.store("Book Nook", owner.id).await;
    fixture.store("Unrated Shop", owner.id).await;
    fixture.rate(alice.id, bakery.id, 5).await;
    fixture.rate(bob.id, bakery.id, 4).await;
    fixture.rate(alice.id, books.id, 2).await;

    let stats = service(&fixture).dashboard().await.unwrap();

    assert_eq!(stats.overview.total_users, 4);
    assert_eq!(stats.overview.total_stores, 3);
    assert_eq!(stats.overview.total_ratings, 3);
    assert_eq!(stats.overview.average_rating.to_string(), "3.67");

    let normal = stats
        .user_stats
        .by_role
        .iter()
        .find(|c| c.role == Role::NormalUser)
        .unwrap();
    assert_eq!(normal.count, 2);
    assert_eq!(stats.user_stats.recent_signups, 4);
    assert_eq!(stats.store_stats.recently_added, 3);

    let top = &stats.store_stats.top_rated;
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Corner Bakery");
    assert_eq!(top[0].average_rating.to_string(), "4.50");

    let counts: Vec<u64> = stats.rating_stats.distribution.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![0, 1, 0, 1, 1]);
    assert_eq!(stats.rating_stats.overall.min, 2);
    assert_eq!(stats.rating_stats.overall.max, 5);
    assert_eq!(stats.rating_stats.recently_submitted, 3);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["overview"]["averageRating"], "3.67");
    assert_eq!(json["userStats"]["byRole"][0]["role"], "system_admin");
}
