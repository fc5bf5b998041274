//! Business services containing domain logic and use cases.

pub mod admin;
pub mod auth;
pub mod authorization;
pub mod rating;
pub mod store;
pub mod token;
pub mod user;

mod lookup;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use admin::AdminService;
pub use auth::{AuthService, Authenticator, PasswordHasher, Registration};
pub use authorization::{AccessPolicy, Caller};
pub use rating::{RatingSearch, RatingService};
pub use store::{AdminStoreSearch, NewStore, StoreChanges, StoreService};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{NewUser, UserChanges, UserService};
