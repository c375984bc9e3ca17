//! MySQL implementation of the BlacklistRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use sqlx::{MySqlPool, Row};

use ts_core::domain::entities::BlacklistedToken;
use ts_core::errors::DomainError;
use ts_core::repositories::BlacklistRepository;

use super::db_error;

/// MySQL implementation of BlacklistRepository
///
/// Access tokens are keyed by their SHA-256 digest, which keeps the
/// primary key a fixed 64 characters whatever the token length.
pub struct MySqlBlacklistRepository {
    pool: MySqlPool,
}

impl MySqlBlacklistRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Hex SHA-256 of the raw token
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl BlacklistRepository for MySqlBlacklistRepository {
    async fn exists(&self, token: &str) -> Result<bool, DomainError> {
        let row = sqlx::query(
            "SELECT EXISTS(SELECT 1 FROM blacklisted_tokens WHERE token_hash = ?) AS found",
        )
        .bind(Self::hash_token(token))
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to check blacklist"))?;

        let found: i64 = row
            .try_get("found")
            .map_err(db_error("Failed to read blacklist check"))?;
        Ok(found == 1)
    }

    async fn insert(&self, entry: BlacklistedToken) -> Result<bool, DomainError> {
        let query = r#"
            INSERT IGNORE INTO blacklisted_tokens (token_hash, blacklisted_at, expires_at)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(Self::hash_token(&entry.token))
            .bind(entry.blacklisted_at)
            .bind(entry.expires_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to blacklist token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM blacklisted_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to cleanup blacklist"))?;

        Ok(result.rows_affected() as usize)
    }
}
