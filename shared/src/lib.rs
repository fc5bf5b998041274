//! Shared utilities and common types for the StoreRating server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope, pagination and sorting primitives
//! - Validation rules

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    PasswordConfig, ReportingConfig, ServerConfig,
};
pub use types::{
    ApiResponse, HealthResponse, Page, Pagination, PaginationMeta, Sort, SortField, SortOrder,
};
pub use utils::validation;
