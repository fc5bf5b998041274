//! Response returned by registration and login.

use serde::Serialize;

use crate::domain::entities::user::User;

/// An authenticated session: the user and the signed token for it
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}
