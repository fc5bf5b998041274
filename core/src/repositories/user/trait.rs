//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first; implementations map storage failures into
//! [`DomainError`] and report unique-email violations as
//! [`DomainError::Conflict`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sr_shared::types::{Page, Pagination, Sort};
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{UserFilter, UserSortField};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```ignore
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use sr_core::repositories::UserRepository;
/// use sr_core::domain::entities::user::User;
/// use sr_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email. Matching is case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Fetch every user whose id is in `ids`, in no particular order
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - The email is already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this id
    /// * `Err(DomainError::Conflict)` - The new email belongs to another user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user, returning whether a row was removed.
    ///
    /// The user's ratings are removed with them.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Whether `email` is registered to a user other than `excluding`
    async fn email_exists(&self, email: &str, excluding: Option<Uuid>) -> Result<bool, DomainError>;

    /// Filtered, sorted page of users
    async fn list(
        &self,
        filter: &UserFilter,
        sort: Sort<UserSortField>,
        pagination: Pagination,
    ) -> Result<Page<User>, DomainError>;

    /// Ids of users whose name contains `fragment`, ignoring case
    async fn find_ids_by_name(&self, fragment: &str) -> Result<Vec<Uuid>, DomainError>;

    /// Total number of users
    async fn count(&self) -> Result<u64, DomainError>;

    /// Number of users holding `role`
    async fn count_by_role(&self, role: Role) -> Result<u64, DomainError>;

    /// Number of users created at or after `since`
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DomainError>;
}
