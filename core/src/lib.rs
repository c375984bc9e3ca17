//! # TeamSync Core
//!
//! Domain layer of the TeamSync identity and trust layer.
//! This crate contains the token entities and principal model, the signing
//! context and the single token verifier shared by every service, the
//! issuer-side services (credentials, refresh tokens, revocation, password
//! reset), repository interfaces and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
