//! Cross-cutting request handling: error mapping and fallback handlers.

pub mod error;

pub use error::{validate_request, ApiError, ApiResult};
