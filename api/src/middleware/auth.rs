//! Request gate binding a verified principal to each request.
//!
//! The gate reads the `Authorization` header, hands it to the shared
//! [`TokenVerifier`] and stores the resulting [`Principal`] in the request
//! extensions. It never rejects a request: a verification failure is logged
//! and the request continues as anonymous. Routes that need an identity ask
//! for one through the [`Authenticated`] extractor, which answers 401.
//!
//! Two flavours exist:
//! 1. `RequestGate::issuer` also consults the revocation store, so a token
//!    blacklisted on logout stops working here at once
//! 2. `RequestGate::downstream` trusts signature and expiry alone and never
//!    performs I/O

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use tracing::{debug, warn};

use ts_core::domain::entities::Principal;
use ts_core::errors::AuthError;
use ts_core::services::token::{strip_bearer, BEARER_PREFIX};
use ts_core::services::{RevocationList, TokenVerifier};

use crate::handlers::error::handle_domain_error;

/// Request gate middleware factory
#[derive(Clone)]
pub struct RequestGate {
    verifier: TokenVerifier,
    revocations: Option<Arc<dyn RevocationList>>,
}

impl RequestGate {
    /// Gate for the issuing service, backed by the revocation store
    pub fn issuer(verifier: TokenVerifier, revocations: Arc<dyn RevocationList>) -> Self {
        Self {
            verifier,
            revocations: Some(revocations),
        }
    }

    /// Gate for services that only hold the signing secret
    pub fn downstream(verifier: TokenVerifier) -> Self {
        Self {
            verifier,
            revocations: None,
        }
    }

    pub fn checks_revocation(&self) -> bool {
        self.revocations.is_some()
    }

    /// Principal for a raw `Authorization` header value, if any
    ///
    /// Only values using the `Bearer ` scheme are considered.
    pub async fn authenticate(&self, header: Option<&str>) -> Option<Principal> {
        let header = header?;
        if !header.starts_with(BEARER_PREFIX) {
            debug!("Ignoring Authorization header without bearer scheme");
            return None;
        }
        let token = strip_bearer(header);

        let principal = match self.verifier.validate(token) {
            Ok(principal) => principal,
            Err(e) => {
                debug!(error = %e, "Bearer token rejected");
                return None;
            }
        };

        if let Some(revocations) = &self.revocations {
            match revocations.is_revoked(token).await {
                Ok(false) => {}
                Ok(true) => {
                    debug!(principal = %principal.name(), "Bearer token has been blacklisted");
                    return None;
                }
                Err(e) => {
                    warn!("Revocation lookup failed, treating request as anonymous: {}", e);
                    return None;
                }
            }
        }

        Some(principal)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestGateMiddleware {
            service: Rc::new(service),
            gate: self.clone(),
        }))
    }
}

/// Request gate middleware service
pub struct RequestGateMiddleware<S> {
    service: Rc<S>,
    gate: RequestGate,
}

impl<S, B> Service<ServiceRequest> for RequestGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate.clone();

        Box::pin(async move {
            let header = authorization_header(req.request());
            if let Some(principal) = gate.authenticate(header.as_deref()).await {
                req.extensions_mut().insert(principal);
            }

            service.call(req).await
        })
    }
}

/// Raw `Authorization` header value, when it is valid UTF-8
pub fn authorization_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_string)
}

/// Bearer token of the request, prefix removed
///
/// `None` unless the header uses the `Bearer ` scheme.
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    authorization_header(req)
        .filter(|value| value.starts_with(BEARER_PREFIX))
        .map(|value| strip_bearer(&value).to_string())
        .filter(|token| !token.is_empty())
}

/// Principal bound by the gate; rejects anonymous requests with 401
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(match principal {
            Some(principal) => Ok(Authenticated(principal)),
            None => {
                let error = AuthError::Unauthenticated.into();
                Err(InternalError::from_response(
                    "Authentication required",
                    handle_domain_error(&error),
                )
                .into())
            }
        })
    }
}

/// Principal bound by the gate, if any
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(pub Option<Principal>);

impl FromRequest for OptionalPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(OptionalPrincipal(
            req.extensions().get::<Principal>().cloned(),
        )))
    }
}
