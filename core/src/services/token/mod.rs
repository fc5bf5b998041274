//! Token service module for JWT management
//!
//! Issues and verifies the signed session tokens handed out at login and
//! registration. Tokens are stateless; revocation happens implicitly when the
//! user they name no longer exists.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
