//! Role-based access checks applied per route.

use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::errors::{AuthError, DomainResult};

/// The authenticated principal behind a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub id: Uuid,
    pub role: Role,
}

impl Caller {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::SystemAdmin
    }
}

impl From<&User> for Caller {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.role)
    }
}

/// What a route requires of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Any valid token
    Authenticated,
    /// A valid token whose user holds one of these roles
    Roles(&'static [Role]),
}

impl AccessPolicy {
    pub const SYSTEM_ADMIN: AccessPolicy = AccessPolicy::Roles(&[Role::SystemAdmin]);
    pub const NORMAL_USER: AccessPolicy = AccessPolicy::Roles(&[Role::NormalUser]);
    pub const STORE_OWNER: AccessPolicy = AccessPolicy::Roles(&[Role::StoreOwner]);

    /// Whether a caller with `role` passes
    pub fn allows(&self, role: Role) -> bool {
        match self {
            AccessPolicy::Authenticated => true,
            AccessPolicy::Roles(roles) => roles.contains(&role),
        }
    }

    /// `MissingToken` without a caller, `InsufficientPermissions` when the
    /// role is not on the allow-list
    pub fn check(&self, caller: Option<&Caller>) -> DomainResult<()> {
        let caller = caller.ok_or(AuthError::MissingToken)?;

        if !self.allows(caller.role) {
            tracing::debug!(user_id = %caller.id, role = %caller.role, "access denied");
            return Err(AuthError::InsufficientPermissions.into());
        }

        Ok(())
    }
}
