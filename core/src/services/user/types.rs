use crate::domain::entities::user::Role;

/// Administrator-created account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
    /// Defaults to `normal_user`
    pub role: Option<Role>,
}

/// Partial user update; `None` leaves a field unchanged.
///
/// A blank `address` clears it.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub role: Option<Role>,
}
