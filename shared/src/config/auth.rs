//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";
const DEFAULT_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token lifetime in seconds
    pub token_expiry_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            token_expiry_seconds: DEFAULT_EXPIRY_SECONDS,
            issuer: String::from("store-rating"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry_seconds = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self { bcrypt_cost: 10 }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_EXPIRES_IN` accepts a bare number of seconds or a number with a
    /// `s`, `m`, `h` or `d` suffix (`7d`, `12h`).
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string());
        let token_expiry_seconds = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|value| parse_duration_seconds(&value))
            .unwrap_or(DEFAULT_EXPIRY_SECONDS);
        let bcrypt_cost = super::env_or("BCRYPT_ROUNDS", 10u32);

        Self {
            jwt: JwtConfig {
                secret,
                token_expiry_seconds,
                ..Default::default()
            },
            password: PasswordConfig { bcrypt_cost },
        }
    }
}

/// Parse a duration such as `7d`, `12h`, `30m`, `45s` or `3600` into seconds.
pub fn parse_duration_seconds(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (number, multiplier) = match value.chars().last()? {
        'd' => (&value[..value.len() - 1], 86_400),
        'h' => (&value[..value.len() - 1], 3_600),
        'm' => (&value[..value.len() - 1], 60),
        's' => (&value[..value.len() - 1], 1),
        _ => (value, 1),
    };

    number
        .parse::<i64>()
        .ok()
        .filter(|n| *n > 0)
        .map(|n| n * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration_seconds("7d"), Some(604_800));
        assert_eq!(parse_duration_seconds("12h"), Some(43_200));
        assert_eq!(parse_duration_seconds("30m"), Some(1_800));
        assert_eq!(parse_duration_seconds("45s"), Some(45));
        assert_eq!(parse_duration_seconds("3600"), Some(3_600));
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("abc"), None);
        assert_eq!(parse_duration_seconds("-1d"), None);
    }

    #[test]
    fn test_default_secret_detection() {
        assert!(JwtConfig::default().is_using_default_secret());
        assert!(!JwtConfig::new("something-else").is_using_default_secret());
    }
}
