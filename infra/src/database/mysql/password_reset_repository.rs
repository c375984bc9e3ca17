//! MySQL implementation of the PasswordResetRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ts_core::domain::entities::PasswordResetToken;
use ts_core::errors::DomainError;
use ts_core::repositories::PasswordResetRepository;

use super::db_error;

pub struct MySqlPasswordResetRepository {
    pool: MySqlPool,
}

impl MySqlPasswordResetRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PasswordResetRepository for MySqlPasswordResetRepository {
    async fn save(&self, token: PasswordResetToken) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO password_reset_tokens (token_hash, user_id, expires_at, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&token.token_hash)
        .bind(token.user_id)
        .bind(token.expires_at)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_error("Failed to save reset token"))?;

        Ok(())
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<PasswordResetToken>, DomainError> {
        let row = sqlx::query(
            "SELECT token_hash, user_id, expires_at, created_at FROM password_reset_tokens WHERE token_hash = ? LIMIT 1",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find reset token"))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(PasswordResetToken {
            token_hash: row.try_get("token_hash").map_err(db_error("Failed to get token_hash"))?,
            user_id: row.try_get("user_id").map_err(db_error("Failed to get user_id"))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(db_error("Failed to get expires_at"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
        }))
    }

    async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete reset token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete reset tokens"))?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE expires_at < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to cleanup reset tokens"))?;

        Ok(result.rows_affected() as usize)
    }
}
