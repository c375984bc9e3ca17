//! Token service module
//!
//! This module handles every operation on signed tokens:
//! - The signing context holding the shared HS256 key
//! - The token verifier used by the issuer and by every downstream service
//! - Access token issuing and service token minting
//! - Background cleanup of expired refresh tokens and blacklist entries

mod cleanup;
mod config;
mod issuer;
mod service_token;
mod signing;
mod verifier;

#[cfg(test)]
mod tests;

pub use cleanup::{CleanupResult, TokenCleanupConfig, TokenCleanupService};
pub use config::TokenServiceConfig;
pub use issuer::{TokenIssuer, DEFAULT_USER_AUTHORITIES};
pub use service_token::ServiceTokenMinter;
pub use signing::SigningContext;
pub use verifier::{strip_bearer, TokenVerifier, BEARER_PREFIX};
