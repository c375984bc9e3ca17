//! Configuration for the token services

use chrono::Duration;
use ts_shared::config::JwtConfig;

/// Configuration for the token services
///
/// The secret and both token lifetimes must match on every verifying instance.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Shared HS256 secret
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
    /// Service token lifetime in seconds
    pub service_token_expiry_seconds: i64,
    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,
    /// Password reset token lifetime in minutes
    pub password_reset_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            access_token_expiry_seconds: jwt.access_token_expiry,
            service_token_expiry_seconds: jwt.service_token_expiry,
            refresh_token_expiry_days: jwt.refresh_token_expiry_days,
            password_reset_expiry_minutes: jwt.password_reset_expiry_minutes,
        }
    }
}

impl TokenServiceConfig {
    pub fn access_ttl(&self) -> Duration {
        Duration::seconds(self.access_token_expiry_seconds)
    }

    pub fn service_ttl(&self) -> Duration {
        Duration::seconds(self.service_token_expiry_seconds)
    }

    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }

    pub fn password_reset_ttl(&self) -> Duration {
        Duration::minutes(self.password_reset_expiry_minutes)
    }
}
