//! Unit tests for mock rating repository

use sr_shared::types::{Pagination, Sort, SortOrder};
use uuid::Uuid;

use crate::domain::entities::rating::{Rating, RatingValue};
use crate::domain::value_objects::{RatingFilter, RatingSortField};
use crate::errors::DomainError;
use crate::repositories::rating::{MockRatingRepository, RatingRepository};

fn rating(user_id: Uuid, store_id: Uuid, value: i64) -> Rating {
    Rating::new(user_id, store_id, RatingValue::new(value).unwrap())
}

#[tokio::test]
async fn test_one_rating_per_user_and_store() {
    let repo = MockRatingRepository::new();
    let (user, store) = (Uuid::new_v4(), Uuid::new_v4());
    repo.create(rating(user, store, 4)).await.unwrap();

    let result = repo.create(rating(user, store, 2)).await;
    match result.unwrap_err() {
        DomainError::Conflict { .. } => {}
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_aggregate_over_empty_set() {
    let repo = MockRatingRepository::new();
    let aggregate = repo
        .aggregate(&RatingFilter::for_store(Uuid::new_v4()))
        .await
        .unwrap();
    assert_eq!(aggregate.count, 0);
    assert_eq!(aggregate.mean, None);
    assert_eq!(aggregate.min, None);
}

#[tokio::test]
async fn test_aggregate_and_summaries() {
    let repo = MockRatingRepository::new();
    let store = Uuid::new_v4();
    let other_store = Uuid::new_v4();
    repo.create(rating(Uuid::new_v4(), store, 5)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), store, 4)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), store, 2)).await.unwrap();

    let aggregate = repo.aggregate(&RatingFilter::for_store(store)).await.unwrap();
    assert_eq!(aggregate.count, 3);
    assert_eq!(aggregate.min, Some(2));
    assert_eq!(aggregate.max, Some(5));
    assert_eq!(aggregate.distinct_stores, 1);

    let summaries = repo.store_summaries(&[store, other_store]).await.unwrap();
    assert_eq!(summaries[&store].average_rating.to_string(), "3.67");
    assert_eq!(summaries[&store].total_ratings, 3);
    assert!(!summaries.contains_key(&other_store));
}

#[tokio::test]
async fn test_list_sorts_by_rating() {
    let repo = MockRatingRepository::new();
    let user = Uuid::new_v4();
    for value in [3, 5, 1] {
        repo.create(rating(user, Uuid::new_v4(), value)).await.unwrap();
    }

    let page = repo
        .list(
            &RatingFilter::for_user(user),
            Sort::new(RatingSortField::Rating, SortOrder::Desc),
            Pagination::new(1, 2),
        )
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    let values: Vec<u8> = page.items.iter().map(|r| r.rating.get()).collect();
    assert_eq!(values, vec![5, 3]);
}

#[tokio::test]
async fn test_delete_by_store_cascades() {
    let repo = MockRatingRepository::new();
    let store = Uuid::new_v4();
    repo.create(rating(Uuid::new_v4(), store, 3)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), store, 4)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), Uuid::new_v4(), 4)).await.unwrap();

    assert_eq!(repo.delete_by_store(store).await.unwrap(), 2);
    assert_eq!(repo.aggregate(&RatingFilter::default()).await.unwrap().count, 1);
}

#[tokio::test]
async fn test_distribution_and_top_rated() {
    let repo = MockRatingRepository::new();
    let best = Uuid::new_v4();
    let worst = Uuid::new_v4();
    repo.create(rating(Uuid::new_v4(), best, 5)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), best, 5)).await.unwrap();
    repo.create(rating(Uuid::new_v4(), worst, 1)).await.unwrap();

    let distribution = repo.distribution().await.unwrap();
    assert_eq!(distribution, vec![(1, 1), (5, 2)]);

    let top = repo.top_rated_stores(5).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, best);
    assert_eq!(top[0].1.total_ratings, 2);

    assert_eq!(repo.top_rated_stores(1).await.unwrap().len(), 1);
}
