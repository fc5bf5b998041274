//! Shared fixtures for service tests

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::rating::{Rating, RatingValue};
use crate::domain::entities::store::Store;
use crate::domain::entities::user::{Role, User};
use crate::repositories::{
    MockRatingRepository, MockStoreRepository, MockUserRepository, RatingRepository,
    StoreRepository, UserRepository,
};
use crate::services::auth::PasswordHasher;

/// Cheapest bcrypt cost, keeps hashing tests fast
pub fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

/// Name padded to the 20 character minimum
pub fn long_name(name: &str) -> String {
    format!("{:<20}", name)
}

pub struct Fixture {
    pub users: Arc<MockUserRepository>,
    pub stores: Arc<MockStoreRepository>,
    pub ratings: Arc<MockRatingRepository>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            stores: Arc::new(MockStoreRepository::new()),
            ratings: Arc::new(MockRatingRepository::new()),
        }
    }

    pub async fn user(&self, name: &str, role: Role) -> User {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        self.users
            .create(User::new(long_name(name), email, "hash".to_string(), None, role))
            .await
            .unwrap()
    }

    pub async fn store(&self, name: &str, owner_id: Uuid) -> Store {
        let email = format!("{}@stores.example.com", name.to_lowercase().replace(' ', "-"));
        self.stores
            .create(Store::new(
                name.to_string(),
                email,
                format!("{} Street", name),
                owner_id,
            ))
            .await
            .unwrap()
    }

    pub async fn rate(&self, user_id: Uuid, store_id: Uuid, value: i64) -> Rating {
        self.ratings
            .create(Rating::new(user_id, store_id, RatingValue::new(value).unwrap()))
            .await
            .unwrap()
    }
}
