//! Shared fixtures for the API integration tests

#![allow(dead_code, unused_macros)]

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ts_api::middleware::RequestGate;
use ts_api::routes::auth::AppState;
use ts_core::domain::entities::{Credential, NewCredential};
use ts_core::domain::value_objects::{NewProfile, ProfileUpdate, UserProfile};
use ts_core::errors::DomainError;
use ts_core::repositories::{
    CredentialRepository, InMemoryBlacklistRepository, InMemoryCredentialRepository,
    InMemoryPasswordResetRepository, InMemoryRefreshTokenRepository,
};
use ts_core::services::{
    AuthService, AuthServiceConfig, PasswordHasher, PasswordService, RefreshTokenService,
    ResetNotifier, RetryPolicy, ServiceTokenMinter, SigningContext, TokenBlacklistService,
    TokenIssuer, TokenVerifier, UserProvisioner,
};

pub const SECRET: &str = "api-integration-test-secret-at-least-32-bytes";
pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "secret";

pub type TestState = AppState<
    InMemoryCredentialRepository,
    InMemoryRefreshTokenRepository,
    InMemoryBlacklistRepository,
    InMemoryPasswordResetRepository,
>;

/// User-management stand-in
#[derive(Default)]
pub struct StubProvisioner {
    pub unavailable: AtomicBool,
    pub created: Mutex<Vec<NewProfile>>,
    pub updates: Mutex<Vec<ProfileUpdate>>,
}

#[async_trait]
impl UserProvisioner for StubProvisioner {
    async fn create_profile(&self, profile: &NewProfile) -> Result<UserProfile, DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Collaborator {
                message: "connection refused".to_string(),
            });
        }
        self.created.lock().unwrap().push(profile.clone());
        Ok(UserProfile {
            id: Some(42),
            name: Some(profile.name.clone()),
            email: Some(profile.email.clone()),
            designation: profile.designation.clone(),
            ..Default::default()
        })
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), DomainError> {
        self.updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}

/// Keeps every reset link instead of mailing it
#[derive(Default)]
pub struct CapturingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl CapturingNotifier {
    pub fn last_token(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, token)| token.clone())
    }
}

#[async_trait]
impl ResetNotifier for CapturingNotifier {
    async fn send_reset_link(
        &self,
        email: &str,
        reset_token: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), reset_token.to_string()));
        Ok(())
    }
}

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub signing: Arc<SigningContext>,
    pub verifier: TokenVerifier,
    pub blacklist: Arc<TokenBlacklistService<InMemoryBlacklistRepository>>,
    pub credentials: Arc<InMemoryCredentialRepository>,
    pub refresh_repo: Arc<InMemoryRefreshTokenRepository>,
    pub provisioner: Arc<StubProvisioner>,
    pub notifier: Arc<CapturingNotifier>,
}

impl TestContext {
    pub fn new() -> Self {
        let signing = Arc::new(SigningContext::new(SECRET));
        let verifier = TokenVerifier::new(signing.clone());
        let credentials = Arc::new(InMemoryCredentialRepository::new());
        let refresh_repo = Arc::new(InMemoryRefreshTokenRepository::new());
        let blacklist = Arc::new(TokenBlacklistService::new(
            Arc::new(InMemoryBlacklistRepository::new()),
            signing.clone(),
        ));
        let provisioner = Arc::new(StubProvisioner::default());
        let notifier = Arc::new(CapturingNotifier::default());

        let auth_service = Arc::new(AuthService::new(
            credentials.clone(),
            Arc::new(RefreshTokenService::new(refresh_repo.clone(), Duration::days(30))),
            blacklist.clone(),
            TokenIssuer::new(signing.clone(), Duration::seconds(12_000)),
            verifier.clone(),
            provisioner.clone(),
            AuthServiceConfig {
                provisioning_retry: RetryPolicy::new(3, std::time::Duration::from_millis(1)),
                hasher: PasswordHasher::with_cost(4),
            },
        ));
        let password_service = Arc::new(
            PasswordService::new(
                credentials.clone(),
                Arc::new(InMemoryPasswordResetRepository::new()),
                notifier.clone(),
                Duration::minutes(60),
            )
            .with_hasher(PasswordHasher::with_cost(4)),
        );

        Self {
            state: web::Data::new(AppState {
                auth_service,
                password_service,
            }),
            signing,
            verifier,
            blacklist,
            credentials,
            refresh_repo,
            provisioner,
            notifier,
        }
    }

    pub fn issuer_gate(&self) -> RequestGate {
        RequestGate::issuer(self.verifier.clone(), self.blacklist.clone())
    }

    pub fn downstream_gate(&self) -> RequestGate {
        RequestGate::downstream(self.verifier.clone())
    }

    /// Active account `a@b.com` / `secret`
    pub async fn seed_user(&self) -> Credential {
        let hash = PasswordHasher::with_cost(4).hash(PASSWORD).unwrap();
        self.credentials
            .create(NewCredential {
                name: "Alice".to_string(),
                email: EMAIL.to_string(),
                password_hash: hash,
                created_at: Utc::now(),
            })
            .await
            .unwrap()
    }

    pub fn service_token(&self, name: &str) -> String {
        ServiceTokenMinter::new(self.signing.clone(), name, Duration::seconds(300))
            .mint()
            .unwrap()
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Logs in `a@b.com` and yields `(access_token, refresh_token)`
macro_rules! login {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::post()
            .uri("/auth/login")
            .set_json(serde_json::json!({
                "email": $crate::common::EMAIL,
                "password": $crate::common::PASSWORD,
            }))
            .to_request();
        let body: serde_json::Value = actix_web::test::call_and_read_body_json($app, req).await;
        (
            body["data"]["access_token"].as_str().unwrap().to_string(),
            body["data"]["refresh_token"].as_str().unwrap().to_string(),
        )
    }};
}
