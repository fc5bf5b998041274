//! Input validation rules shared by the HTTP layer and the domain services.
//!
//! Every check here is a pure function of its input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length, in characters, of a user's name
pub const NAME_MIN_LENGTH: usize = 20;
/// Maximum length, in characters, of a user's name
pub const NAME_MAX_LENGTH: usize = 60;
/// Maximum length, in characters, of a store name
pub const STORE_NAME_MAX_LENGTH: usize = 60;
/// Maximum length, in characters, of an address
pub const ADDRESS_MAX_LENGTH: usize = 400;
/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 16;
/// Characters accepted as the required "special" password character
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// User-facing messages for each rule
pub mod messages {
    pub const NAME_LENGTH: &str = "Name must be between 20 and 60 characters";
    pub const STORE_NAME_LENGTH: &str = "Store name must be between 1 and 60 characters";
    pub const EMAIL_FORMAT: &str = "Please provide a valid email address";
    pub const ADDRESS_LENGTH: &str = "Address must not exceed 400 characters";
    pub const ADDRESS_REQUIRED: &str = "Address is required";
    pub const PASSWORD_POLICY: &str = "Password must be 8-16 characters and include at least one uppercase letter and one special character";
    pub const ROLE: &str = "Invalid role. Must be system_admin, normal_user, or store_owner";
    pub const RATING_RANGE: &str = "Rating must be an integer between 1 and 5";
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Common validation functions
pub mod validators {
    use super::*;

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// `local@domain.tld` with no whitespace and a single `@` per side
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// 8-16 characters, at least one uppercase letter and one special character
    pub fn is_strong_password(password: &str) -> bool {
        length_between(password, PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
    }

    /// Names are 20-60 characters
    pub fn is_valid_name(name: &str) -> bool {
        length_between(name, NAME_MIN_LENGTH, NAME_MAX_LENGTH)
    }

    /// Store names are non-empty and at most 60 characters
    pub fn is_valid_store_name(name: &str) -> bool {
        not_empty(name) && name.chars().count() <= STORE_NAME_MAX_LENGTH
    }

    /// Addresses are optional but capped at 400 characters
    pub fn is_valid_address(address: &str) -> bool {
        address.chars().count() <= ADDRESS_MAX_LENGTH
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside a SQL `LIKE` pattern
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match, the in-memory counterpart of `LOWER(col) LIKE '%needle%'`
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
