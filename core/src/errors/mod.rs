//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Coarse classification of a failure.
///
/// The HTTP layer chooses a status code from this alone, never from the
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input or a violated business rule (400)
    Validation,
    /// Duplicate unique value (409)
    Conflict,
    /// Referenced entity does not exist (404)
    NotFound,
    /// Missing or bad credentials (401)
    Authentication,
    /// Authenticated but not allowed (403)
    Authorization,
    /// Anything else (500)
    Unexpected,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        DomainError::BusinessRule {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    /// `"{resource} not found"`
    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        DomainError::NotFound {
            message: format!("{resource} not found"),
        }
    }

    /// Not found with a message of the caller's choosing
    pub fn not_found_message(message: impl Into<String>) -> Self {
        DomainError::NotFound {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. }
            | DomainError::BusinessRule { .. }
            | DomainError::ValidationErr(_) => ErrorKind::Validation,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Forbidden { .. } => ErrorKind::Authorization,
            DomainError::Internal { .. } => ErrorKind::Unexpected,
            DomainError::Auth(error) => match error {
                AuthError::InvalidCredentials
                | AuthError::MissingToken
                | AuthError::UserNoLongerExists => ErrorKind::Authentication,
                AuthError::UserAlreadyExists => ErrorKind::Conflict,
                AuthError::CurrentPasswordIncorrect | AuthError::PasswordUnchanged => {
                    ErrorKind::Validation
                }
                AuthError::InsufficientPermissions => ErrorKind::Authorization,
                AuthError::HashingFailed => ErrorKind::Unexpected,
            },
            DomainError::Token(TokenError::TokenGenerationFailed) => ErrorKind::Unexpected,
            DomainError::Token(_) => ErrorKind::Authentication,
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Unexpected failures collapse to a generic message; token failures share
    /// one message so clients cannot distinguish expiry from tampering.
    pub fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Unexpected => String::from("Internal server error"),
            _ => match self {
                DomainError::Token(_) => String::from("Invalid or expired token"),
                other => other.to_string(),
            },
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
