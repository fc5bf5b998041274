//! Rating service module
//!
//! Submission, update and deletion of star ratings, plus the three rating
//! listings: the caller's own ratings, one store's ratings and the
//! administrator's view over every rating.

mod service;
mod types;


pub use service::RatingService;
pub use types::RatingSearch;
