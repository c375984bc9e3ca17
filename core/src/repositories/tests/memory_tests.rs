//! Unit tests for the in-memory repositories

use chrono::{Duration, Utc};

use crate::domain::entities::{BlacklistedToken, DeviceInfo, NewCredential, RefreshToken};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{
    BlacklistRepository, CredentialRepository, InMemoryBlacklistRepository,
    InMemoryCredentialRepository, InMemoryRefreshTokenRepository, RefreshTokenRepository,
};

#[tokio::test]
async fn test_save_find_and_delete_refresh_token() {
    let repo = InMemoryRefreshTokenRepository::new();
    let token = RefreshToken::issue(1, DeviceInfo::default(), Utc::now(), Duration::days(30));

    repo.save(token.clone()).await.unwrap();
    assert_eq!(repo.find_by_token(&token.token).await.unwrap(), Some(token.clone()));

    assert!(repo.save(token.clone()).await.is_err());

    assert!(repo.delete_by_token(&token.token).await.unwrap());
    assert!(!repo.delete_by_token(&token.token).await.unwrap());
    assert!(repo.find_by_token(&token.token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_expired_refresh_tokens() {
    let repo = InMemoryRefreshTokenRepository::new();
    let now = Utc::now();
    let old = RefreshToken::issue(1, DeviceInfo::default(), now - Duration::days(31), Duration::days(30));
    let fresh = RefreshToken::issue(1, DeviceInfo::default(), now, Duration::days(30));
    repo.save(old).await.unwrap();
    repo.save(fresh.clone()).await.unwrap();

    assert_eq!(repo.delete_expired(now).await.unwrap(), 1);
    assert_eq!(repo.len().await, 1);
    assert!(repo.find_by_token(&fresh.token).await.unwrap().is_some());
}

#[tokio::test]
async fn test_blacklist_insert_is_idempotent() {
    let repo = InMemoryBlacklistRepository::new();
    let now = Utc::now();
    let entry = BlacklistedToken::new("abc", now + Duration::hours(1), now);

    assert!(repo.insert(entry.clone()).await.unwrap());
    assert!(!repo.insert(entry).await.unwrap());
    assert!(repo.exists("abc").await.unwrap());
    assert_eq!(repo.len().await, 1);

    assert_eq!(repo.delete_expired(now + Duration::hours(2)).await.unwrap(), 1);
    assert!(!repo.exists("abc").await.unwrap());
}

#[tokio::test]
async fn test_credential_email_is_unique() {
    let repo = InMemoryCredentialRepository::new();
    let new = NewCredential {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        password_hash: "hash".to_string(),
        created_at: Utc::now(),
    };

    let created = repo.create(new.clone()).await.unwrap();
    assert!(created.is_active);
    assert!(repo.exists_by_email("a@b.com").await.unwrap());

    let err = repo.create(new).await.unwrap_err();
    assert_eq!(err, DomainError::Auth(AuthError::EmailAlreadyUsed));
}
