//! Reset link delivery

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;
use ts_core::errors::DomainError;
use ts_core::services::ResetNotifier;

/// Writes the reset link to the log instead of mailing it
///
/// Used until a mail relay is wired in; the token itself is never logged
/// in full.
#[derive(Debug, Clone)]
pub struct LoggingResetNotifier {
    reset_url: String,
}

impl LoggingResetNotifier {
    pub fn new(reset_url: impl Into<String>) -> Self {
        Self {
            reset_url: reset_url.into(),
        }
    }

    /// Link sent to the account owner
    pub fn link_for(&self, reset_token: &str) -> String {
        format!("{}?token={}", self.reset_url, reset_token)
    }
}

#[async_trait]
impl ResetNotifier for LoggingResetNotifier {
    async fn send_reset_link(
        &self,
        email: &str,
        reset_token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let preview: String = reset_token.chars().take(8).collect();
        info!(
            email = %email,
            expires_at = %expires_at,
            "Password reset link ready: {}...",
            self.link_for(&preview)
        );
        Ok(())
    }
}
