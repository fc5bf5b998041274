use serde::Deserialize;
use validator::Validate;

use sr_core::services::Registration;

use super::validators::{validate_address, validate_email, validate_name, validate_password};

/// Body of `POST /auth/register`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterRequest {
    /// 20-60 characters
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    /// 8-16 characters with an uppercase letter and a special character
    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(custom(function = "validate_address"))]
    pub address: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            password: request.password,
            address: request.address,
        }
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password are required"))]
    pub password: String,
}

/// Body of `PUT /users/password`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(alias = "current_password")]
    #[validate(length(min = 1, message = "Current password and new password are required"))]
    pub current_password: String,

    #[serde(alias = "new_password")]
    #[validate(custom(function = "validate_password"))]
    pub new_password: String,
}
