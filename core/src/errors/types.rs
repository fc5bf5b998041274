//! Specialised error types for authentication, tokens and input validation
//!
//! Each of these converts into [`super::DomainError`] and carries the exact
//! message returned to API clients.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password. Both cases share one message so that
    /// callers cannot probe which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    UserAlreadyExists,

    #[error("Current password is incorrect")]
    CurrentPasswordIncorrect,

    #[error("New password must be different from current password")]
    PasswordUnchanged,

    #[error("Access token is required")]
    MissingToken,

    /// The token is valid but its subject no longer exists
    #[error("Invalid or expired token")]
    UserNoLongerExists,

    #[error("Access denied. Insufficient permissions.")]
    InsufficientPermissions,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Please provide a valid email address")]
    InvalidEmail,

    #[error("Invalid role. Must be system_admin, normal_user, or store_owner")]
    InvalidRole,

    #[error("Rating must be an integer between 1 and 5")]
    InvalidRating,
}
