//! Persistence interfaces for the issuer.
//!
//! Every trait has an in-memory implementation used by tests and by
//! single-instance development setups. MySQL implementations live in
//! `ts_infra`.

pub mod blacklist;
pub mod credential;
pub mod password_reset;
pub mod refresh_token;

#[cfg(test)]
mod tests;

pub use blacklist::{BlacklistRepository, InMemoryBlacklistRepository};
pub use credential::{CredentialRepository, InMemoryCredentialRepository};
pub use password_reset::{InMemoryPasswordResetRepository, PasswordResetRepository};
pub use refresh_token::{InMemoryRefreshTokenRepository, RefreshTokenRepository};
