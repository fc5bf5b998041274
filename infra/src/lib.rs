//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the StoreRating backend,
//! following Clean Architecture principles. It provides the MySQL
//! implementations of the repository traits declared in `sr_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and one repository
//!   per aggregate (users, stores, ratings), all on SQLx

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, MySqlRatingRepository, MySqlStoreRepository, MySqlUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
