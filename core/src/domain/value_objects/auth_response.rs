//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};

use super::user_view::UserView;

pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: UserView,
    pub access_token: String,
    /// Opaque UUID-shaped refresh token
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user: UserView, access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            user,
            access_token,
            refresh_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
            expires_in,
        }
    }
}

/// Returned by a refresh; `refresh_token` is the one that was presented
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenRefreshResponse {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}
