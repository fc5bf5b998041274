//! Field validators plugged into `#[validate(custom(...))]`.
//!
//! Each wraps a rule from `sr_shared::validation` and attaches its
//! user-facing message.

use std::borrow::Cow;

use sr_core::domain::entities::{RatingValue, Role};
use sr_shared::validation::{messages, validators};
use validator::ValidationError;

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Names are stored trimmed, so the length rule applies to the trimmed value
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    if validators::is_valid_name(value.trim()) {
        Ok(())
    } else {
        Err(failure("name", messages::NAME_LENGTH))
    }
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if validators::is_valid_email(value) {
        Ok(())
    } else {
        Err(failure("email", messages::EMAIL_FORMAT))
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if validators::is_strong_password(value) {
        Ok(())
    } else {
        Err(failure("password", messages::PASSWORD_POLICY))
    }
}

pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    if validators::is_valid_address(value) {
        Ok(())
    } else {
        Err(failure("address", messages::ADDRESS_LENGTH))
    }
}

/// Store addresses are required as well as bounded
pub fn validate_store_address(value: &str) -> Result<(), ValidationError> {
    if !validators::not_empty(value) {
        return Err(failure("address", messages::ADDRESS_REQUIRED));
    }
    validate_address(value)
}

pub fn validate_store_name(value: &str) -> Result<(), ValidationError> {
    if validators::is_valid_store_name(value) {
        Ok(())
    } else {
        Err(failure("name", messages::STORE_NAME_LENGTH))
    }
}

pub fn validate_role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Role>()
        .map(|_| ())
        .map_err(|_| failure("role", messages::ROLE))
}

pub fn validate_rating(value: f64) -> Result<(), ValidationError> {
    RatingValue::from_number(value)
        .map(|_| ())
        .map_err(|_| failure("rating", messages::RATING_RANGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_rule() {
        assert!(validate_rating(1.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(0.0).is_err());
        assert!(validate_rating(6.0).is_err());
        let error = validate_rating(4.5).unwrap_err();
        assert_eq!(error.message.as_deref(), Some(messages::RATING_RANGE));
    }

    #[test]
    fn test_store_address_is_required() {
        let error = validate_store_address("  ").unwrap_err();
        assert_eq!(error.message.as_deref(), Some(messages::ADDRESS_REQUIRED));
        assert!(validate_store_address("12 Harbour Road").is_ok());
        assert!(validate_store_address(&"x".repeat(401)).is_err());
    }

    #[test]
    fn test_name_rule_ignores_padding() {
        let error = validate_name("   Short Name Person   ").unwrap_err();
        assert_eq!(error.message.as_deref(), Some(messages::NAME_LENGTH));
        assert!(validate_name("  Alexandra Catherine Smith  ").is_ok());
    }

    #[test]
    fn test_role_rule() {
        assert!(validate_role("store_owner").is_ok());
        assert!(validate_role("superuser").is_err());
    }
}
