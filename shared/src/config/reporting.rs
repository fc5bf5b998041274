//! Dashboard and statistics configuration

use serde::{Deserialize, Serialize};

/// Windows used when counting "recent" activity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportingConfig {
    /// Trailing window, in days, for the admin dashboard's recent counts
    pub recent_activity_days: i64,

    /// Trailing window, in days, for a user's "ratings this month"
    pub user_activity_days: i64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            recent_activity_days: 7,
            user_activity_days: 30,
        }
    }
}

impl ReportingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            recent_activity_days: super::env_or("ADMIN_RECENT_DAYS", defaults.recent_activity_days)
                .max(1),
            user_activity_days: defaults.user_activity_days,
        }
    }
}
