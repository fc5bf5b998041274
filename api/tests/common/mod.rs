//! Shared setup for HTTP tests: the real services over in-memory repositories.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use sr_api::{AppState, Repositories};
use sr_core::domain::entities::{Rating, RatingValue, Role, Store, User};
use sr_core::repositories::{
    MockRatingRepository, MockStoreRepository, MockUserRepository, RatingRepository,
    StoreRepository, UserRepository,
};
use sr_core::services::{PasswordHasher, TokenService, TokenServiceConfig};
use sr_shared::config::{AppConfig, CorsConfig};
use uuid::Uuid;

/// Password every seeded user can log in with
pub const PASSWORD: &str = "Secret#123";

pub struct MockRepositories;

impl Repositories for MockRepositories {
    type Users = MockUserRepository;
    type Stores = MockStoreRepository;
    type Ratings = MockRatingRepository;
}

pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub stores: Arc<MockStoreRepository>,
    pub ratings: Arc<MockRatingRepository>,
    pub config: AppConfig,
    pub state: web::Data<AppState<MockRepositories>>,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.password.bcrypt_cost = 4;
        config.cors = CorsConfig::default().or_permissive();

        let users = Arc::new(MockUserRepository::new());
        let stores = Arc::new(MockStoreRepository::new());
        let ratings = Arc::new(MockRatingRepository::new());
        let state = web::Data::new(AppState::<MockRepositories>::new(
            Arc::clone(&users),
            Arc::clone(&stores),
            Arc::clone(&ratings),
            &config,
        ));

        Self {
            users,
            stores,
            ratings,
            config,
            state,
        }
    }

    /// Insert a user whose password is [`PASSWORD`]
    pub async fn seed_user(&self, name: &str, email: &str, role: Role) -> User {
        let hash = PasswordHasher::new(4).hash(PASSWORD).await.unwrap();
        let user = User::new(long_name(name), email.to_string(), hash, None, role);
        self.users.create(user).await.unwrap()
    }

    pub async fn seed_store(&self, name: &str, email: &str, owner_id: Uuid) -> Store {
        let store = Store::new(
            name.to_string(),
            email.to_string(),
            format!("{} High Street", name.len()),
            owner_id,
        );
        self.stores.create(store).await.unwrap()
    }

    pub async fn seed_rating(&self, user_id: Uuid, store_id: Uuid, value: i64) -> Rating {
        let rating = Rating::new(user_id, store_id, RatingValue::new(value).unwrap());
        self.ratings.create(rating).await.unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        TokenService::new(TokenServiceConfig::from(&self.config.auth.jwt))
            .issue(user.id)
            .unwrap()
    }

    pub fn bearer(&self, user: &User) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token_for(user)))
    }
}

/// Pad a short name to the 20 character minimum
pub fn long_name(name: &str) -> String {
    format!("{:<20}", format!("{} Testington", name))
}
