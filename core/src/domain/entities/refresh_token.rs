//! Opaque refresh token persisted by the issuer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder stored when the client did not send a user agent or address
pub const UNKNOWN_DEVICE_VALUE: &str = "Unknown";

/// Refresh token row
///
/// The token string is unique. Once it is looked up past `expiry_date`
/// it is deleted and never revived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: i64,
    pub expiry_date: DateTime<Utc>,
    pub user_agent: String,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token with a random UUID value
    pub fn issue(user_id: i64, device: DeviceInfo, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user_id,
            expiry_date: now + ttl,
            user_agent: device.user_agent,
            ip_address: device.ip_address,
            created_at: now,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry_date
    }
}

/// Client metadata recorded alongside a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub user_agent: String,
    pub ip_address: String,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            user_agent: UNKNOWN_DEVICE_VALUE.to_string(),
            ip_address: UNKNOWN_DEVICE_VALUE.to_string(),
        }
    }
}

impl DeviceInfo {
    pub fn new(user_agent: Option<&str>, ip_address: Option<&str>) -> Self {
        Self {
            user_agent: non_blank(user_agent).unwrap_or(UNKNOWN_DEVICE_VALUE).to_string(),
            ip_address: non_blank(ip_address).unwrap_or(UNKNOWN_DEVICE_VALUE).to_string(),
        }
    }

    /// Best-effort client address
    ///
    /// First entry of `X-Forwarded-For`, then `X-Real-IP`, then the peer address.
    /// The literal `unknown` sent by some proxies is skipped.
    pub fn resolve_client_ip(
        forwarded_for: Option<&str>,
        real_ip: Option<&str>,
        peer_addr: Option<&str>,
    ) -> Option<String> {
        let usable = |value: &str| !value.is_empty() && !value.eq_ignore_ascii_case("unknown");

        if let Some(first) = forwarded_for
            .and_then(|header| header.split(',').next())
            .map(str::trim)
            .filter(|v| usable(v))
        {
            return Some(first.to_string());
        }

        if let Some(real) = real_ip.map(str::trim).filter(|v| usable(v)) {
            return Some(real.to_string());
        }

        peer_addr.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
