//! Domain entities

pub mod rating;
pub mod store;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use rating::{Rating, RatingValue, MAX_RATING, MIN_RATING};
pub use store::{Store, StoreSummary};
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_ISSUER};
pub use user::{Role, User, UserSummary};
