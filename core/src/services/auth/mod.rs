//! Authentication service module
//!
//! This module provides:
//! - User registration and login with bcrypt-hashed passwords
//! - Password changes for signed-in users
//! - Resolution of a bearer token to the user it belongs to

mod authenticator;
mod password;
mod service;
mod types;


pub use authenticator::Authenticator;
pub use password::PasswordHasher;
pub use service::AuthService;
pub use types::Registration;
