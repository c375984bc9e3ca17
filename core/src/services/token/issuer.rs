//! Access token issuing

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::{Claims, Credential};
use crate::errors::TokenError;

use super::signing::SigningContext;

/// Roles embedded in every user access token
pub const DEFAULT_USER_AUTHORITIES: &[&str] = &["USER"];

/// Mints access tokens for authenticated users
#[derive(Clone, Debug)]
pub struct TokenIssuer {
    signing: Arc<SigningContext>,
    access_ttl: Duration,
    authorities: Vec<String>,
}

impl TokenIssuer {
    pub fn new(signing: Arc<SigningContext>, access_ttl: Duration) -> Self {
        Self {
            signing,
            access_ttl,
            authorities: DEFAULT_USER_AUTHORITIES.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn with_authorities(mut self, authorities: Vec<String>) -> Self {
        self.authorities = authorities;
        self
    }

    /// Access token lifetime in seconds
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    pub fn issue_access_token(&self, credential: &Credential) -> Result<String, TokenError> {
        self.issue_access_token_at(credential, Utc::now())
    }

    pub fn issue_access_token_at(
        &self,
        credential: &Credential,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::for_user(
            credential.email.clone(),
            credential.id,
            &self.authorities,
            now,
            self.access_ttl,
        );
        self.signing.sign(&claims)
    }
}
