//! Configuration for the token service

use jsonwebtoken::Algorithm;
use sr_shared::config::JwtConfig;

use crate::domain::entities::token::{DEFAULT_TOKEN_EXPIRY_SECONDS, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,
    /// Value of the `iss` claim, checked on verification
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            token_expiry_seconds: config.token_expiry_seconds,
            issuer: config.issuer.clone(),
        }
    }
}
