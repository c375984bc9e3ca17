//! Application factory
//!
//! Wires the request gate, the request logger and every `/auth` route into
//! an Actix-web application.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use ts_core::repositories::{
    BlacklistRepository, CredentialRepository, PasswordResetRepository, RefreshTokenRepository,
};
use ts_shared::{error_codes, ErrorResponse};

use crate::handlers::error::json_error_handler;
use crate::middleware::auth::RequestGate;
use crate::routes::auth::{
    login::login,
    logout::{logout, logout_simple},
    me::{current_user, update_current_user},
    password::{change_password, request_password_reset, reset_password},
    refresh::refresh,
    register::register,
    validate::{check_blacklist, validate_token},
    AppState,
};
use crate::routes::health::health_check;

/// Create and configure the application with all dependencies
///
/// `gate` decides how bearer tokens are turned into principals; the issuer
/// passes [`RequestGate::issuer`].
pub fn create_app<C, R, B, P>(
    app_state: web::Data<AppState<C, R, B, P>>,
    gate: RequestGate,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    C: CredentialRepository + 'static,
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
    P: PasswordResetRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Gate runs inside the request span
        .wrap(gate)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/register", web::post().to(register::<C, R, B, P>))
                .route("/login", web::post().to(login::<C, R, B, P>))
                .route("/refresh", web::post().to(refresh::<C, R, B, P>))
                .route("/logout", web::post().to(logout::<C, R, B, P>))
                .route("/logout/simple", web::post().to(logout_simple::<C, R, B, P>))
                .route("/me", web::get().to(current_user::<C, R, B, P>))
                .route("/me", web::post().to(update_current_user::<C, R, B, P>))
                .route("/password-change", web::post().to(change_password::<C, R, B, P>))
                .route(
                    "/password-reset-request",
                    web::post().to(request_password_reset::<C, R, B, P>),
                )
                .route("/password-reset", web::post().to(reset_password::<C, R, B, P>))
                .route("/validate", web::get().to(validate_token::<C, R, B, P>))
                .route("/blacklist/check", web::get().to(check_blacklist::<C, R, B, P>)),
        )
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
