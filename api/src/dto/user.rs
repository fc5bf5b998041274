use serde::Deserialize;
use validator::Validate;

use sr_core::domain::entities::Role;
use sr_core::services::{NewUser, UserChanges};

use super::validators::{
    validate_address, validate_email, validate_name, validate_password, validate_role,
};
use crate::handlers::{ApiError, ApiResult};

/// Body of `POST /users` (administrators only)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(custom(function = "validate_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(custom(function = "validate_address"))]
    pub address: Option<String>,

    /// Defaults to `normal_user`
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl CreateUserRequest {
    pub fn into_new_user(self) -> ApiResult<NewUser> {
        Ok(NewUser {
            role: parse_role(self.role.as_deref())?,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            address: self.address,
        })
    }
}

/// Body of `PUT /users/{id}`; omitted fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_email"))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_address"))]
    pub address: Option<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> ApiResult<UserChanges> {
        Ok(UserChanges {
            role: parse_role(self.role.as_deref())?,
            name: self.name.map(|n| n.trim().to_string()),
            email: self.email.map(|e| e.trim().to_string()),
            address: self.address,
        })
    }
}

fn parse_role(role: Option<&str>) -> ApiResult<Option<Role>> {
    role.map(|r| r.parse::<Role>())
        .transpose()
        .map_err(|e| ApiError::Domain(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_defaults_role() {
        let request = CreateUserRequest {
            name: "Administrator Created Account".to_string(),
            email: "created@example.com".to_string(),
            password: "Welcome#1".to_string(),
            address: None,
            role: None,
        };
        assert!(request.validate().is_ok());
        assert_eq!(request.into_new_user().unwrap().role, None);
    }

    #[test]
    fn test_padded_short_name_is_rejected() {
        let create = CreateUserRequest {
            name: "    Padded Short Name    ".to_string(),
            email: "padded@example.com".to_string(),
            password: "Welcome#1".to_string(),
            ..Default::default()
        };
        assert!(create.validate().is_err());

        let update = UpdateUserRequest {
            name: Some("    Padded Short Name    ".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let request = UpdateUserRequest {
            role: Some("root".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
