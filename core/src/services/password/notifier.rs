use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Delivers a reset token to the account owner
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_link(
        &self,
        email: &str,
        reset_token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;
}
