//! Store service module
//!
//! Public store browsing with live averages, the owner's view of their
//! stores and administrator store management.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::StoreService;
pub use types::{AdminStoreSearch, NewStore, StoreChanges};
