//! Access token revoked before its natural expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistedToken {
    /// Raw access token string
    pub token: String,
    pub blacklisted_at: DateTime<Utc>,
    /// Copied from the token's own `exp` claim
    pub expires_at: DateTime<Utc>,
}

impl BlacklistedToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            blacklisted_at: now,
            expires_at,
        }
    }

    /// Row can be swept once the token would be rejected by its expiry alone
    pub fn is_prunable_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}
