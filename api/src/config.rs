//! Process-level configuration: environment loading and log output.

use sr_shared::config::{AppConfig, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Load `.env` (if present) and build the configuration from the environment
pub fn load_config() -> AppConfig {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to read .env file: {}", e);
        }
    }

    AppConfig::from_env()
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the configured level. Calling this twice is a no-op.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if installed.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Log configuration problems that should not stop startup
pub fn warn_on_insecure_defaults(config: &AppConfig) {
    if config.auth.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            tracing::error!("JWT_SECRET is not set; tokens are signed with the default secret");
        } else {
            tracing::warn!("Using the default JWT secret");
        }
    }
}
