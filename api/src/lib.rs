//! # StoreRating API
//!
//! HTTP layer of the StoreRating backend: request DTOs, authentication and
//! role middleware, route handlers and the application factory.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Repositories};
