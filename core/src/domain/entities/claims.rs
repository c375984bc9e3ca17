//! Claim set carried inside every signed token.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Reserved suffix that marks a subject as an internal service
pub const SERVICE_SUFFIX: &str = "-service";

/// JSON payload of an access or service token
///
/// User tokens carry `email`, `userId` and `authorities` and no `sub`.
/// Service tokens carry only a `sub` ending in [`SERVICE_SUFFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Comma-joined role strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<String>,

    /// Issued at (seconds since epoch)
    pub iat: i64,

    /// Expiration (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims identifying a human user
    pub fn for_user(
        email: impl Into<String>,
        user_id: i64,
        authorities: &[String],
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: None,
            email: Some(email.into()),
            user_id: Some(user_id),
            authorities: Some(authorities.join(",")),
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Creates claims identifying an internal service
    ///
    /// `service_name` receives the reserved suffix unless it already ends with it.
    pub fn for_service(service_name: &str, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let subject = if service_name.ends_with(SERVICE_SUFFIX) {
            service_name.to_string()
        } else {
            format!("{}{}", service_name, SERVICE_SUFFIX)
        };

        Self {
            sub: Some(subject),
            email: None,
            user_id: None,
            authorities: None,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_default()
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0)
            .single()
            .unwrap_or_default()
    }

    /// Splits the comma-joined authorities, dropping empty entries
    pub fn authority_list(&self) -> Vec<String> {
        self.authorities
            .as_deref()
            .map(|joined| {
                joined
                    .split(',')
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn has_service_subject(&self) -> bool {
        self.sub
            .as_deref()
            .map(|s| s.ends_with(SERVICE_SUFFIX))
            .unwrap_or(false)
    }
}
