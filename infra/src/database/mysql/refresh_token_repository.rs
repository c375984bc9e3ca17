//! MySQL implementation of the RefreshTokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ts_core::domain::entities::RefreshToken;
use ts_core::errors::DomainError;
use ts_core::repositories::RefreshTokenRepository;

use super::db_error;

/// MySQL implementation of RefreshTokenRepository
///
/// The opaque token is a random UUID and is stored as-is; its `token`
/// column carries a unique index.
pub struct MySqlRefreshTokenRepository {
    pool: MySqlPool,
}

impl MySqlRefreshTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        Ok(RefreshToken {
            token: row.try_get("token").map_err(db_error("Failed to get token"))?,
            user_id: row.try_get("user_id").map_err(db_error("Failed to get user_id"))?,
            expiry_date: row
                .try_get::<DateTime<Utc>, _>("expiry_date")
                .map_err(db_error("Failed to get expiry_date"))?,
            user_agent: row
                .try_get("user_agent")
                .map_err(db_error("Failed to get user_agent"))?,
            ip_address: row
                .try_get("ip_address")
                .map_err(db_error("Failed to get ip_address"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
        })
    }
}

#[async_trait]
impl RefreshTokenRepository for MySqlRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                token, user_id, expiry_date, user_agent, ip_address, created_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&token.token)
            .bind(token.user_id)
            .bind(token.expiry_date)
            .bind(&token.user_agent)
            .bind(&token.ip_address)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to save refresh token"))?;

        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT token, user_id, expiry_date, user_agent, ip_address, created_at
            FROM refresh_tokens
            WHERE token = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find refresh token"))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete refresh token"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expiry_date < ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to cleanup expired refresh tokens"))?;

        Ok(result.rows_affected() as usize)
    }
}
