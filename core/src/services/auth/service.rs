//! Main authentication service implementation

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{non_blank, AuthResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::authenticator::Authenticator;
use super::password::PasswordHasher;
use super::types::Registration;

/// Authentication service for registration, login and token resolution
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// bcrypt wrapper
    password_hasher: PasswordHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - Password hashing configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Create a `normal_user` account and sign it in
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The new user and a session token
    /// * `Err(AuthError::UserAlreadyExists)` - The email is taken
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResponse> {
        if self
            .user_repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.password_hasher.hash(&registration.password).await?;
        let user = User::new(
            registration.name,
            registration.email,
            password_hash,
            non_blank(registration.address),
            Role::NormalUser,
        );

        // A concurrent registration can still win the race to the unique index
        let user = self
            .user_repository
            .create(user)
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => AuthError::UserAlreadyExists.into(),
                other => other,
            })?;

        tracing::info!(user_id = %user.id, "user registered");
        self.respond(user)
    }

    /// Check credentials and issue a token
    ///
    /// Unknown emails and wrong passwords fail identically.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash).await? {
            tracing::debug!(user_id = %user.id, "login rejected");
            return Err(AuthError::InvalidCredentials.into());
        }

        self.respond(user)
    }

    /// Replace the caller's password after checking the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut user = self.current_user(user_id).await?;

        if !self
            .password_hasher
            .verify(current_password, &user.password_hash)
            .await?
        {
            return Err(AuthError::CurrentPasswordIncorrect.into());
        }

        if current_password == new_password {
            return Err(AuthError::PasswordUnchanged.into());
        }

        let password_hash = self.password_hasher.hash(new_password).await?;
        user.set_password_hash(password_hash);
        self.user_repository.update(user).await?;

        tracing::info!(user_id = %user_id, "password changed");
        Ok(())
    }

    /// Load a user by id
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    fn respond(&self, user: User) -> DomainResult<AuthResponse> {
        let token = self.token_service.issue(user.id)?;
        Ok(AuthResponse { user, token })
    }
}

#[async_trait]
impl<U> Authenticator for AuthService<U>
where
    U: UserRepository,
{
    async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let user_id = self.token_service.user_id_from(token)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::UserNoLongerExists.into())
    }
}
