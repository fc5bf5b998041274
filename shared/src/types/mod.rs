//! Type definitions module
//!
//! - `common` - Sorting primitives and aliases
//! - `pagination` - Pagination for list endpoints
//! - `response` - API response envelope and health checks

pub mod common;
pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use common::{Sort, SortField, SortOrder, Timestamp};
pub use pagination::{Page, Pagination, PaginationMeta, MAX_LIMIT};
pub use response::{ApiResponse, HealthResponse};
