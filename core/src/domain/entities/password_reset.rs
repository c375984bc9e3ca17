//! Single-use password reset token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored reset token
///
/// Only the SHA-256 hex digest of the token handed to the user is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    pub token_hash: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
