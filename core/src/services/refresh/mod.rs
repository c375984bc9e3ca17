//! Refresh token store

mod service;

pub use service::RefreshTokenService;
