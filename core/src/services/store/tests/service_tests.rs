//! Unit tests for store service

use sr_shared::types::{Pagination, Sort, SortOrder};
use uuid::Uuid;

use crate::domain::entities::user::Role;
use crate::domain::value_objects::{StoreFilter, StoreSortField};
use crate::errors::DomainError;
use crate::repositories::{
    MockRatingRepository, MockStoreRepository, MockUserRepository, RatingRepository,
    StoreRepository,
};
use crate::services::store::{AdminStoreSearch, NewStore, StoreChanges, StoreService};
use crate::services::test_support::Fixture;

type Service = StoreService<MockStoreRepository, MockUserRepository, MockRatingRepository>;

fn service(fixture: &Fixture) -> Service {
    StoreService::new(
        fixture.stores.clone(),
        fixture.users.clone(),
        fixture.ratings.clone(),
    )
}

fn new_store(owner_id: Uuid, email: &str) -> NewStore {
    NewStore {
        name: "Corner Bakery".to_string(),
        email: email.to_string(),
        address: "1 Main Street".to_string(),
        owner_id,
    }
}

fn business_rule_message(error: DomainError) -> String {
    match error {
        DomainError::BusinessRule { message } => message,
        other => panic!("Expected BusinessRule, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let service = service(&fixture);

    let created = service
        .create(new_store(owner.id, "bakery@example.com"))
        .await
        .unwrap();
    let fetched = service.get_by_id(created.id, None).await.unwrap();

    assert_eq!(fetched.store.name, "Corner Bakery");
    assert_eq!(fetched.store.email, "bakery@example.com");
    assert_eq!(fetched.store.address, "1 Main Street");
    assert_eq!(fetched.average_rating.to_string(), "0.00");
    assert_eq!(fetched.total_ratings, 0);
    assert_eq!(fetched.owner.as_ref().unwrap().id, owner.id);
    assert_eq!(fetched.user_rating, None);
}

#[tokio::test]
async fn test_create_validates_owner_and_email() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let shopper = fixture.user("Shopper", Role::NormalUser).await;
    let service = service(&fixture);

    let missing = service
        .create(new_store(Uuid::new_v4(), "a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(missing), "Owner not found");

    let wrong_role = service
        .create(new_store(shopper.id, "a@example.com"))
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(wrong_role), "Owner must have store_owner role");

    service.create(new_store(owner.id, "a@example.com")).await.unwrap();
    let duplicate = service
        .create(new_store(owner.id, "A@example.com"))
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(duplicate), "Store with this email already exists");
}

#[tokio::test]
async fn test_owner_may_have_several_stores() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let service = service(&fixture);

    service.create(new_store(owner.id, "one@example.com")).await.unwrap();
    service.create(new_store(owner.id, "two@example.com")).await.unwrap();

    assert_eq!(service.get_by_owner(owner.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_by_id_reports_caller_rating() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let me = fixture.user("Me", Role::NormalUser).await;
    let other = fixture.user("Other", Role::NormalUser).await;
    let store = fixture.store("Corner Bakery", owner.id).await;
    let mine = fixture.rate(me.id, store.id, 4).await;
    fixture.rate(other.id, store.id, 5).await;
    let service = service(&fixture);

    let listing = service.get_by_id(store.id, Some(me.id)).await.unwrap();
    assert_eq!(listing.user_rating.unwrap().get(), 4);
    assert_eq!(listing.user_rating_id, Some(mine.id));
    assert_eq!(listing.average_rating.to_string(), "4.50");
    assert_eq!(listing.total_ratings, 2);

    match service.get_by_id(Uuid::new_v4(), None).await.unwrap_err() {
        DomainError::NotFound { message } => assert_eq!(message, "Store not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_all_newest_first_with_name_filter() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    fixture.store("Corner Bakery", owner.id).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    fixture.store("Bakery Deluxe", owner.id).await;
    fixture.store("Book Nook", owner.id).await;
    let service = service(&fixture);

    let page = service
        .get_all(None, Some("bakery".to_string()), Pagination::new(1, 12))
        .await
        .unwrap();
    let names: Vec<&str> = page.stores.iter().map(|s| s.store.name.as_str()).collect();
    assert_eq!(names, vec!["Bakery Deluxe", "Corner Bakery"]);
    assert_eq!(page.pagination.total_items, 2);
    assert!(page.stores.iter().all(|s| s.owner.is_none()));
}

#[tokio::test]
async fn test_search_sorts_and_attaches_owner() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    fixture.store("Zebra Market", owner.id).await;
    fixture.store("Apple Market", owner.id).await;
    fixture.store("Book Nook", owner.id).await;

    let page = service(&fixture)
        .search(
            None,
            StoreFilter {
                name: Some("market".to_string()),
                ..Default::default()
            },
            Sort::new(StoreSortField::Name, SortOrder::Asc),
            Pagination::default(),
        )
        .await
        .unwrap();

    let names: Vec<&str> = page.stores.iter().map(|s| s.store.name.as_str()).collect();
    assert_eq!(names, vec!["Apple Market", "Zebra Market"]);
    assert_eq!(page.stores[0].owner.as_ref().unwrap().id, owner.id);
}

#[tokio::test]
async fn test_get_by_owner_nests_ratings_with_raters() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let rater = fixture.user("Rater", Role::NormalUser).await;
    let store = fixture.store("Corner Bakery", owner.id).await;
    fixture.rate(rater.id, store.id, 3).await;
    let service = service(&fixture);

    let stores = service.get_by_owner(owner.id).await.unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].average_rating.to_string(), "3.00");
    let ratings = stores[0].ratings.as_ref().unwrap();
    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].user.as_ref().unwrap().email, rater.email);

    match service.get_by_owner(rater.id).await.unwrap_err() {
        DomainError::NotFound { message } => {
            assert_eq!(message, "No store found for this owner")
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_checks_email_and_new_owner() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let next_owner = fixture.user("Next Owner", Role::StoreOwner).await;
    let shopper = fixture.user("Shopper", Role::NormalUser).await;
    let store = fixture.store("Corner Bakery", owner.id).await;
    let taken = fixture.store("Book Nook", owner.id).await;
    let service = service(&fixture);

    let duplicate = service
        .update(
            store.id,
            StoreChanges {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(duplicate), "Store with this email already exists");

    let not_owner = service
        .update(
            store.id,
            StoreChanges {
                owner_id: Some(shopper.id),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(not_owner), "New owner must have store_owner role");

    let missing = service
        .update(
            store.id,
            StoreChanges {
                owner_id: Some(Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(business_rule_message(missing), "New owner not found");

    let updated = service
        .update(
            store.id,
            StoreChanges {
                name: Some("Corner Bakery & Cafe".to_string()),
                email: Some(store.email.clone()),
                owner_id: Some(next_owner.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Corner Bakery & Cafe");
    assert_eq!(updated.owner_id, next_owner.id);
    assert_eq!(updated.address, store.address);
}

#[tokio::test]
async fn test_delete_removes_ratings() {
    let fixture = Fixture::new();
    let owner = fixture.user("Owner", Role::StoreOwner).await;
    let rater = fixture.user("Rater", Role::NormalUser).await;
    let store = fixture.store("Corner Bakery", owner.id).await;
    let rating = fixture.rate(rater.id, store.id, 5).await;
    let service = service(&fixture);

    service.delete(store.id).await.unwrap();

    assert!(fixture.stores.find_by_id(store.id).await.unwrap().is_none());
    assert!(fixture.ratings.find_by_id(rating.id).await.unwrap().is_none());
    assert!(matches!(
        service.delete(store.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_list_admin_filters_by_owner_name() {
    let fixture = Fixture::new();
    let alice = fixture.user("Alice Owner", Role::StoreOwner).await;
    let bob = fixture.user("Bob Owner", Role::StoreOwner).await;
    let rater = fixture.user("Rater", Role::NormalUser).await;
    let bakery = fixture.store("Corner Bakery", alice.id).await;
    fixture.store("Book Nook", bob.id).await;
    fixture.rate(rater.id, bakery.id, 4).await;
    let service = service(&fixture);
    let sort = Sort::new(StoreSortField::CreatedAt, SortOrder::Desc);

    let page = service
        .list_admin(
            AdminStoreSearch {
                owner_name: Some("alice".to_string()),
                ..Default::default()
            },
            sort,
            Pagination::new(1, 20),
        )
        .await
        .unwrap();
    assert_eq!(page.stores.len(), 1);
    assert_eq!(page.stores[0].store.id, bakery.id);
    assert_eq!(page.stores[0].owner.as_ref().unwrap().id, alice.id);
    assert_eq!(page.stores[0].total_ratings, 1);

    let none = service
        .list_admin(
            AdminStoreSearch {
                owner_name: Some("carol".to_string()),
                ..Default::default()
            },
            sort,
            Pagination::new(1, 20),
        )
        .await
        .unwrap();
    assert!(none.stores.is_empty());
}
