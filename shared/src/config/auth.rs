//! Signing secret and token lifetimes
//!
//! Every instance that verifies tokens must be configured with the same
//! secret and the same lifetimes as the issuer.

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// Minimum length of the shared HMAC secret in bytes
pub const MIN_SECRET_LENGTH: usize = 32;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared secret for HS256 signing
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Service token lifetime in seconds
    pub service_token_expiry: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// Password reset token lifetime in minutes
    pub password_reset_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: 12_000, // 3h20m
            service_token_expiry: 300,
            refresh_token_expiry_days: 30,
            password_reset_expiry_minutes: 60,
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

    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_days = days;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Reject secrets too short for HS256
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.secret.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort {
                min: MIN_SECRET_LENGTH,
                actual: self.secret.len(),
            });
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);

        Self {
            jwt: JwtConfig {
                secret,
                access_token_expiry: env_or("JWT_ACCESS_TOKEN_EXPIRY", defaults.access_token_expiry),
                service_token_expiry: env_or(
                    "JWT_SERVICE_TOKEN_EXPIRY",
                    defaults.service_token_expiry,
                ),
                refresh_token_expiry_days: env_or(
                    "REFRESH_TOKEN_EXPIRY_DAYS",
                    defaults.refresh_token_expiry_days,
                ),
                password_reset_expiry_minutes: env_or(
                    "PASSWORD_RESET_EXPIRY_MINUTES",
                    defaults.password_reset_expiry_minutes,
                ),
            },
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}
