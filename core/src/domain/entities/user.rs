//! User entity representing an account on the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::ValidationError;

/// The closed set of roles a user can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages users, stores and ratings
    SystemAdmin,
    /// Browses stores and submits ratings
    NormalUser,
    /// Views the feedback left on the stores they own
    StoreOwner,
}

impl Role {
    /// All roles, in the order they are reported by statistics
    pub const ALL: [Role; 3] = [Role::SystemAdmin, Role::NormalUser, Role::StoreOwner];

    /// Wire and database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdmin => "system_admin",
            Role::NormalUser => "normal_user",
            Role::StoreOwner => "store_owner",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::NormalUser
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system_admin" => Ok(Role::SystemAdmin),
            "normal_user" => Ok(Role::NormalUser),
            "store_owner" => Ok(Role::StoreOwner),
            _ => Err(ValidationError::InvalidRole),
        }
    }
}

/// User entity.
///
/// The password hash never leaves the process: it is skipped on
/// serialization so any user payload is safe to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name, 20-60 characters
    pub name: String,

    /// Login email, globally unique
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional postal address
    pub address: Option<String>,

    /// Role that gates what the user may do
    pub role: Role,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        address: Option<String>,
        role: Role,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            address,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    pub fn set_address(&mut self, address: Option<String>) {
        self.address = address;
        self.updated_at = Utc::now();
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is a system administrator
    pub fn is_admin(&self) -> bool {
        self.role == Role::SystemAdmin
    }

    /// Checks if the user owns stores
    pub fn is_store_owner(&self) -> bool {
        self.role == Role::StoreOwner
    }

    /// Compact public view embedded in other payloads
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: None,
        }
    }

    /// Like [`User::summary`] but also exposing the role
    pub fn summary_with_role(&self) -> UserSummary {
        UserSummary {
            role: Some(self.role),
            ..self.summary()
        }
    }
}

/// Compact user reference: `{id, name, email}` and optionally the role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
