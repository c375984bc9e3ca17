//! Mapping of domain errors to HTTP responses
//!
//! Every failure body is a [`ErrorResponse`] carrying a stable machine code
//! and a client-facing message. Internal faults are logged and answered with
//! a generic message.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use tracing::error;
use validator::ValidationErrors;

use ts_core::errors::{AuthError, DomainError, TokenError};
use ts_shared::{error_codes, ErrorResponse};

const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::EmailAlreadyUsed | AuthError::IncorrectCurrentPassword => {
                StatusCode::BAD_REQUEST
            }
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
        },
        DomainError::Token(token) => match token {
            TokenError::MalformedToken
            | TokenError::SignatureInvalid
            | TokenError::TokenExpired
            | TokenError::UnrecognizedPrincipal
            | TokenError::InvalidRefreshToken
            | TokenError::ExpiredRefreshToken => StatusCode::UNAUTHORIZED,
            TokenError::TokenBlacklisted => StatusCode::FORBIDDEN,
            TokenError::InvalidResetToken => StatusCode::BAD_REQUEST,
            TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        },
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Collaborator { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_for(error);

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("Internal error while handling request: {}", error);
        INTERNAL_ERROR_MESSAGE.to_string()
    } else {
        error.to_string()
    };

    HttpResponse::build(status).json(ErrorResponse::new(error.error_code(), message))
}

/// 400 response listing every failed field, sorted by field name
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| match &failure.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: invalid value", field),
            })
        })
        .collect();
    messages.sort();

    HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::VALIDATION_ERROR,
        messages.join(", "),
    ))
}

/// JSON extractor failures answered in the common error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid request body: {}", err),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}
