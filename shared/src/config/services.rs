//! Identity of this service and the collaborators it calls

use serde::{Deserialize, Serialize};

/// Outbound service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicesConfig {
    /// Name used when minting service tokens, e.g. `auth` becomes `auth-service`
    pub service_name: String,

    /// Base URL of the user-management collaborator
    pub user_management_url: String,

    /// Timeout for outbound calls in seconds
    pub request_timeout_seconds: u64,

    /// Front-end page that receives password reset tokens
    pub password_reset_url: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            service_name: String::from("auth"),
            user_management_url: String::from("http://localhost:8082"),
            request_timeout_seconds: 10,
            password_reset_url: String::from("http://localhost:3000/reset-password"),
        }
    }
}

impl ServicesConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            user_management_url: std::env::var("USER_MANAGEMENT_SERVICE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.user_management_url),
            request_timeout_seconds: super::env_or(
                "SERVICE_REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            ),
            password_reset_url: std::env::var("PASSWORD_RESET_URL")
                .unwrap_or(defaults.password_reset_url),
        }
    }
}
