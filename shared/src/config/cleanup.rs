//! Background cleanup schedule

use serde::{Deserialize, Serialize};

use super::env_or;

/// Schedule of the expired-token sweep
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CleanupConfig {
    /// Interval between sweeps in seconds
    pub interval_seconds: u64,

    pub enabled: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

impl CleanupConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_seconds: env_or("TOKEN_CLEANUP_INTERVAL_SECONDS", defaults.interval_seconds),
            enabled: env_or("TOKEN_CLEANUP_ENABLED", defaults.enabled),
        }
    }
}
