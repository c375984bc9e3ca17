//! The token verifier shared by the issuer and every downstream service

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{Claims, Principal};
use crate::errors::TokenError;

use super::signing::SigningContext;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Removes a leading `Bearer ` scheme if present
pub fn strip_bearer(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    trimmed.strip_prefix(BEARER_PREFIX).unwrap_or(trimmed).trim()
}

/// Turns a bearer string into a [`Principal`]
///
/// Pure and lock-free; never performs I/O. Revocation is not consulted here.
#[derive(Clone, Debug)]
pub struct TokenVerifier {
    signing: Arc<SigningContext>,
}

impl TokenVerifier {
    pub fn new(signing: Arc<SigningContext>) -> Self {
        Self { signing }
    }

    pub fn validate(&self, raw: &str) -> Result<Principal, TokenError> {
        self.validate_at(raw, Utc::now())
    }

    /// Validates against an explicit clock
    pub fn validate_at(&self, raw: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        let claims = self.verify_claims_at(raw, now)?;
        Self::principal_from_claims(&claims)
    }

    /// Signature and expiry check, returning the raw claims
    pub fn verify_claims_at(&self, raw: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token = strip_bearer(raw);
        if token.is_empty() {
            return Err(TokenError::MalformedToken);
        }

        let claims = self.signing.verify(token)?;
        if claims.is_expired_at(now) {
            debug!(exp = claims.exp, "Rejecting expired token");
            return Err(TokenError::TokenExpired);
        }
        Ok(claims)
    }

    /// Email first, then a service-suffixed subject
    ///
    /// Only ever called on claims whose signature has been checked.
    pub fn principal_from_claims(claims: &Claims) -> Result<Principal, TokenError> {
        if let Some(email) = claims.email.as_deref().filter(|e| !e.trim().is_empty()) {
            return Ok(Principal::User {
                email: email.to_string(),
                user_id: claims.user_id,
                authorities: claims.authority_list(),
            });
        }

        match claims.sub.as_deref() {
            Some(subject) if claims.has_service_subject() => Ok(Principal::Service {
                name: subject.to_string(),
            }),
            _ => Err(TokenError::UnrecognizedPrincipal),
        }
    }
}
