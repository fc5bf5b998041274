//! Request DTOs and their validation rules.

pub mod auth;
pub mod query;
pub mod rating;
pub mod store;
pub mod user;
pub mod validators;

pub use auth::{ChangePasswordRequest, LoginRequest, RegisterRequest};
pub use query::ListQuery;
pub use rating::{SubmitRatingRequest, UpdateRatingRequest};
pub use store::{CreateStoreRequest, UpdateStoreRequest};
pub use user::{CreateUserRequest, UpdateUserRequest};
