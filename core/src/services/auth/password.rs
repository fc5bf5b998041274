//! bcrypt password hashing
//!
//! bcrypt is CPU bound, so both operations run on tokio's blocking pool.

use sr_shared::config::PasswordConfig;

use crate::errors::{AuthError, DomainError, DomainResult};

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_COST, MAX_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Salted hash of `password`
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("hashing task failed: {e}")))?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt hash failed");
                DomainError::Auth(AuthError::HashingFailed)
            })
    }

    /// Whether `password` matches `hash`
    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("verification task failed: {e}")))?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt verify failed");
                DomainError::Auth(AuthError::HashingFailed)
            })
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::from(&PasswordConfig::default())
    }
}

impl From<&PasswordConfig> for PasswordHasher {
    fn from(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }
}
