//! Main authentication service implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::entities::{Credential, DeviceInfo, NewCredential, Principal};
use crate::domain::value_objects::{
    AuthResponse, ProfileUpdate, Registration, TokenRefreshResponse, UserView,
};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{BlacklistRepository, CredentialRepository, RefreshTokenRepository};
use crate::services::password::PasswordHasher;
use crate::services::provisioning::{RetryingProvisioner, UserProvisioner};
use crate::services::refresh::RefreshTokenService;
use crate::services::revocation::TokenBlacklistService;
use crate::services::token::{TokenIssuer, TokenVerifier};

use super::config::{AuthServiceConfig, PROFILE_CREATION_FAILED, PROFILE_UPDATE_FAILED};

/// Authentication service for the issuer
pub struct AuthService<C, R, B>
where
    C: CredentialRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
{
    credentials: Arc<C>,
    refresh_tokens: Arc<RefreshTokenService<R>>,
    blacklist: Arc<TokenBlacklistService<B>>,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
    /// User-management collaborator, wrapped in the configured retry
    provisioner: Arc<dyn UserProvisioner>,
    hasher: PasswordHasher,
}

impl<C, R, B> AuthService<C, R, B>
where
    C: CredentialRepository,
    R: RefreshTokenRepository,
    B: BlacklistRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `credentials` - Login credential store
    /// * `refresh_tokens` - Refresh token store
    /// * `blacklist` - Revocation store
    /// * `issuer` - Access token issuer
    /// * `verifier` - Shared token verifier
    /// * `provisioner` - User-management collaborator (retried per `config`)
    /// * `config` - Service configuration
    pub fn new(
        credentials: Arc<C>,
        refresh_tokens: Arc<RefreshTokenService<R>>,
        blacklist: Arc<TokenBlacklistService<B>>,
        issuer: TokenIssuer,
        verifier: TokenVerifier,
        provisioner: Arc<dyn UserProvisioner>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            credentials,
            refresh_tokens,
            blacklist,
            issuer,
            verifier,
            provisioner: Arc::new(RetryingProvisioner::new(provisioner, config.provisioning_retry)),
            hasher: config.hasher,
        }
    }

    /// Register a new account
    ///
    /// The profile is created in the user-management service first; the
    /// credential is stored only once that succeeded.
    pub async fn register(&self, registration: Registration) -> DomainResult<UserView> {
        let email = registration.email.trim().to_string();
        info!(email = %email, "Starting user registration");

        if self.credentials.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyUsed.into());
        }

        let password_hash = self.hasher.hash(&registration.password)?;

        let mut profile_request = registration.to_profile();
        profile_request.email = email.clone();

        let profile = self
            .provisioner
            .create_profile(&profile_request)
            .await
            .map_err(|e| {
                error!(email = %email, "Failed to create user in user-management service: {}", e);
                DomainError::Collaborator {
                    message: PROFILE_CREATION_FAILED.to_string(),
                }
            })?;

        let credential = self
            .credentials
            .create(NewCredential {
                name: registration.name.trim().to_string(),
                email: email.clone(),
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        info!(email = %email, user_id = credential.id, "User registration completed");
        Ok(UserView::from(&credential).with_profile(profile))
    }

    /// Check email and password
    ///
    /// Unknown email, inactive account and wrong password all fail with
    /// `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<Credential> {
        let credential = match self.credentials.find_by_email(email.trim()).await? {
            Some(c) => c,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !credential.is_active {
            warn!(user_id = credential.id, "Login attempt on inactive account");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !self.hasher.verify(password, &credential.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credential)
    }

    /// Authenticate and issue an access and refresh token pair
    pub async fn login(&self, email: &str, password: &str, device: DeviceInfo) -> DomainResult<AuthResponse> {
        let mut credential = self.authenticate(email, password).await?;
        let now = Utc::now();

        let access_token = self.issuer.issue_access_token_at(&credential, now)?;

        self.credentials.record_login(credential.id, now).await?;
        credential.last_login_at = Some(now);

        let refresh_token = self.refresh_tokens.issue_at(credential.id, device, now).await?;

        info!(email = %credential.email, "User logged in");
        Ok(AuthResponse::new(
            UserView::from(&credential),
            access_token,
            refresh_token.token,
            self.issuer.access_ttl_seconds(),
        ))
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenRefreshResponse> {
        self.refresh_token_at(refresh_token, Utc::now()).await
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The same refresh token string is handed back.
    pub async fn refresh_token_at(
        &self,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<TokenRefreshResponse> {
        let stored = self.refresh_tokens.verify_at(refresh_token, now).await?;

        let credential = self
            .credentials
            .find_by_id(stored.user_id)
            .await?
            .ok_or(TokenError::InvalidRefreshToken)?;

        let access_token = self.issuer.issue_access_token_at(&credential, now)?;
        Ok(TokenRefreshResponse::new(access_token, stored.token))
    }

    /// Blacklist the access token and delete the refresh token
    ///
    /// A failure to blacklist is logged and does not fail the logout.
    pub async fn logout(&self, refresh_token: Option<&str>, access_token: Option<&str>) -> DomainResult<()> {
        if let Some(token) = access_token.filter(|t| !t.trim().is_empty()) {
            if let Err(e) = self.blacklist.blacklist(token).await {
                warn!("Could not blacklist access token on logout: {}", e);
            }
        }

        if let Some(token) = refresh_token.filter(|t| !t.trim().is_empty()) {
            self.refresh_tokens.revoke(token).await?;
        }

        info!("User logged out");
        Ok(())
    }

    pub async fn is_token_blacklisted(&self, token: &str) -> DomainResult<bool> {
        self.blacklist.is_blacklisted(token).await
    }

    /// Issuer-side validation: blacklist first, then signature and expiry
    pub async fn validate_token(&self, token: &str) -> DomainResult<Principal> {
        if self.blacklist.is_blacklisted(token).await? {
            return Err(TokenError::TokenBlacklisted.into());
        }
        Ok(self.verifier.validate(token)?)
    }

    /// Account of the authenticated user
    pub async fn current_user(&self, principal: &Principal) -> DomainResult<UserView> {
        let email = principal.email().ok_or(AuthError::Forbidden)?;
        let credential = self
            .credentials
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(UserView::from(&credential))
    }

    /// Forward a profile update to the user-management service
    pub async fn update_current_user(&self, principal: &Principal, name: Option<String>) -> DomainResult<()> {
        let email = principal.email().ok_or(AuthError::Forbidden)?;
        let update = ProfileUpdate {
            name,
            email: email.to_string(),
        };

        self.provisioner.update_profile(&update).await.map_err(|e| {
            error!(email = %email, "Failed to update user profile: {}", e);
            DomainError::Collaborator {
                message: PROFILE_UPDATE_FAILED.to_string(),
            }
        })?;

        info!(email = %email, "User profile updated via user-management service");
        Ok(())
    }
}
