//! Authentication service module
//!
//! This module ties the issuer-side flows together:
//! - Registration with profile provisioning in the user-management service
//! - Login, token refresh and logout
//! - Issuer-side token validation, which also consults the blacklist
//! - Current-user lookup and profile updates

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{AuthServiceConfig, PROFILE_CREATION_FAILED, PROFILE_UPDATE_FAILED};
pub use service::AuthService;
