pub mod rating;
pub mod store;
pub mod user;

pub use rating::{MockRatingRepository, RatingRepository};
pub use store::{MockStoreRepository, StoreRepository};
pub use user::{MockUserRepository, UserRepository};
