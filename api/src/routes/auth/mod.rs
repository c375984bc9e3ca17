//! Authentication route handlers
//!
//! This module contains the issuer's `/auth` surface:
//! - Registration and login
//! - Token refresh and logout
//! - Current user lookup and profile update
//! - Password change and reset
//! - Token validation and blacklist lookup for other services

pub mod login;
pub mod logout;
pub mod me;
pub mod password;
pub mod refresh;
pub mod register;
pub mod validate;

use actix_web::{http::header::USER_AGENT, HttpRequest};
use std::sync::Arc;

use ts_core::domain::entities::DeviceInfo;
use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_core::services::{AuthService, PasswordService};

/// Application state that holds shared services
pub struct AppState<C, R, B, P>
where
    C: CredentialRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
    P: PasswordResetRepository,
{
    pub auth_service: Arc<AuthService<C, R, B>>,
    pub password_service: Arc<PasswordService<C, P>>,
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|value| value.to_str().ok())
}

/// User agent and best-effort client address of the caller
pub(crate) fn device_info(req: &HttpRequest) -> DeviceInfo {
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());
    let ip_address = DeviceInfo::resolve_client_ip(
        header_value(req, "x-forwarded-for"),
        header_value(req, "x-real-ip"),
        peer.as_deref(),
    );

    DeviceInfo::new(header_value(req, USER_AGENT.as_str()), ip_address.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_device_info_prefers_forwarded_for() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.7, 10.0.0.1"))
            .insert_header(("X-Real-IP", "198.51.100.2"))
            .insert_header((USER_AGENT, "curl/8.0"))
            .peer_addr("127.0.0.1:5555".parse().unwrap())
            .to_http_request();

        let device = device_info(&req);
        assert_eq!(device.ip_address, "203.0.113.7");
        assert_eq!(device.user_agent, "curl/8.0");
    }

    #[test]
    fn test_device_info_falls_back_to_peer_address() {
        let req = TestRequest::default()
            .peer_addr("192.0.2.10:4000".parse().unwrap())
            .to_http_request();

        let device = device_info(&req);
        assert_eq!(device.ip_address, "192.0.2.10");
        assert_eq!(device.user_agent, ts_core::domain::entities::UNKNOWN_DEVICE_VALUE);
    }
}
