//! MySQL implementation of the CredentialRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;

use ts_core::domain::entities::{Credential, NewCredential};
use ts_core::errors::{AuthError, DomainError};
use ts_core::repositories::CredentialRepository;

use super::db_error;

const SELECT_COLUMNS: &str =
    "SELECT id, name, email, password_hash, is_active, created_at, last_login_at FROM users";

/// MySQL implementation of CredentialRepository over the `users` table
pub struct MySqlCredentialRepository {
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: &sqlx::mysql::MySqlRow) -> Result<Credential, DomainError> {
        Ok(Credential {
            id: row.try_get("id").map_err(db_error("Failed to get id"))?,
            name: row.try_get("name").map_err(db_error("Failed to get name"))?,
            email: row.try_get("email").map_err(db_error("Failed to get email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(db_error("Failed to get password_hash"))?,
            is_active: row
                .try_get("is_active")
                .map_err(db_error("Failed to get is_active"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(db_error("Failed to get last_login_at"))?,
        })
    }

    fn is_unique_violation(e: &sqlx::Error) -> bool {
        matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
    }
}

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Credential>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_credential).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Credential>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_credential).transpose()
    }

    async fn create(&self, credential: NewCredential) -> Result<Credential, DomainError> {
        let query = r#"
            INSERT INTO users (name, email, password_hash, is_active, created_at)
            VALUES (?, ?, ?, TRUE, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&credential.name)
            .bind(&credential.email)
            .bind(&credential.password_hash)
            .bind(credential.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if Self::is_unique_violation(&e) {
                    DomainError::Auth(AuthError::EmailAlreadyUsed)
                } else {
                    db_error("Failed to create user")(e)
                }
            })?;

        let id = result.last_insert_id() as i64;
        debug!(user_id = id, "Credential stored");

        Ok(Credential {
            id,
            name: credential.name,
            email: credential.email,
            password_hash: credential.password_hash,
            is_active: true,
            created_at: credential.created_at,
            last_login_at: None,
        })
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update password"))?;

        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(AuthError::UserNotFound.into());
        }
        Ok(())
    }

    async fn record_login(&self, id: i64, at: DateTime<Utc>) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to record login"))?;

        if result.rows_affected() == 0 && self.find_by_id(id).await?.is_none() {
            return Err(AuthError::UserNotFound.into());
        }
        Ok(())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check email"))?;

        let found: i64 = row.try_get("found").map_err(db_error("Failed to read email check"))?;
        Ok(found == 1)
    }
}
