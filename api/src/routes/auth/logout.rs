use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::ApiResponse;

use crate::dto::auth::LogoutRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::{bearer_token, OptionalPrincipal};

use super::AppState;

const LOGGED_OUT: &str = "User logged out successfully";

/// Handler for POST /auth/logout
///
/// Blacklists the bearer access token and deletes the refresh token given in
/// the optional body. Both are optional, so logging out twice succeeds.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {access_token}
/// ```
pub async fn logout<C, R, B, P>(
    req: HttpRequest,
    state: web::Data<AppState<C, R, B, P>>,
    principal: OptionalPrincipal,
    body: Option<web::Json<LogoutRequest>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    let refresh_token = body.and_then(|body| body.into_inner().refresh_token);
    let access_token = bearer_token(&req);

    if let OptionalPrincipal(Some(principal)) = &principal {
        debug!(principal = %principal.name(), "Logout requested");
    }

    match state
        .auth_service
        .logout(refresh_token.as_deref(), access_token.as_deref())
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message(LOGGED_OUT)),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /auth/logout/simple
///
/// Blacklists the bearer access token only.
pub async fn logout_simple<C, R, B, P>(
    req: HttpRequest,
    state: web::Data<AppState<C, R, B, P>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    let access_token = bearer_token(&req);
    match state.auth_service.logout(None, access_token.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message(LOGGED_OUT)),
        Err(error) => handle_domain_error(&error),
    }
}
