//! User service module
//!
//! Profiles, administrator user management and per-user rating activity.

mod service;
mod types;


pub use service::UserService;
pub use types::{NewUser, UserChanges};
