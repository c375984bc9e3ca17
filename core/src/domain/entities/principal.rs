//! Authenticated identity bound to a request.

use serde::Serialize;

pub const AUTHORITY_USER: &str = "USER";
pub const AUTHORITY_SERVICE: &str = "SERVICE";

/// Either a human user or an internal service, decided once at verification time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Principal {
    User {
        email: String,
        #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
        user_id: Option<i64>,
        authorities: Vec<String>,
    },
    Service {
        /// Full subject, suffix included
        name: String,
    },
}

impl Principal {
    /// Granted authority used by route-level authorization
    pub fn authority(&self) -> &'static str {
        match self {
            Principal::User { .. } => AUTHORITY_USER,
            Principal::Service { .. } => AUTHORITY_SERVICE,
        }
    }

    /// Email for users, subject for services
    pub fn name(&self) -> &str {
        match self {
            Principal::User { email, .. } => email,
            Principal::Service { name } => name,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Principal::User { email, .. } => Some(email),
            Principal::Service { .. } => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        match self {
            Principal::User { user_id, .. } => *user_id,
            Principal::Service { .. } => None,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Principal::User { .. })
    }

    pub fn is_service(&self) -> bool {
        matches!(self, Principal::Service { .. })
    }
}
