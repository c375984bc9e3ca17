//! Token cleanup service for periodic maintenance of refresh tokens and blacklist
//!
//! Sweeping is pure storage reclamation: expired access tokens are already
//! rejected by their `exp` claim and expired refresh tokens by their expiry
//! date. Concurrent sweeps from several instances are safe because the
//! delete predicates are idempotent.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};
use ts_shared::config::CleanupConfig;

use crate::errors::DomainError;
use crate::repositories::{BlacklistRepository, RefreshTokenRepository};
use crate::services::refresh::RefreshTokenService;
use crate::services::revocation::TokenBlacklistService;

/// Configuration for token cleanup service
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

impl From<&CleanupConfig> for TokenCleanupConfig {
    fn from(config: &CleanupConfig) -> Self {
        Self {
            interval_seconds: config.interval_seconds,
            enabled: config.enabled,
        }
    }
}

/// Service for cleaning up expired refresh tokens and blacklist entries
pub struct TokenCleanupService<R, B>
where
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
{
    refresh_tokens: Arc<RefreshTokenService<R>>,
    blacklist: Arc<TokenBlacklistService<B>>,
    config: TokenCleanupConfig,
}

impl<R, B> TokenCleanupService<R, B>
where
    R: RefreshTokenRepository + 'static,
    B: BlacklistRepository + 'static,
{
    pub fn new(
        refresh_tokens: Arc<RefreshTokenService<R>>,
        blacklist: Arc<TokenBlacklistService<B>>,
        config: TokenCleanupConfig,
    ) -> Self {
        Self {
            refresh_tokens,
            blacklist,
            config,
        }
    }

    /// Run a single cleanup cycle against the current time
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        self.run_cleanup_at(Utc::now()).await
    }

    /// Run a single cleanup cycle
    ///
    /// A failure in one sweep is recorded in the result and does not stop
    /// the other.
    pub async fn run_cleanup_at(&self, now: DateTime<Utc>) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        info!("Starting token cleanup cycle");

        let mut result = CleanupResult::default();

        match self.refresh_tokens.delete_expired(now).await {
            Ok(count) => result.expired_refresh_tokens_deleted = count,
            Err(e) => {
                error!("Failed to cleanup expired refresh tokens: {}", e);
                result.errors.push(format!("Refresh token cleanup error: {}", e));
            }
        }

        match self.blacklist.sweep(now).await {
            Ok(count) => result.blacklist_entries_deleted = count,
            Err(e) => {
                error!("Failed to cleanup blacklist: {}", e);
                result.errors.push(format!("Blacklist cleanup error: {}", e));
            }
        }

        info!(
            "Token cleanup completed - Refresh: {}, Blacklist: {}",
            result.expired_refresh_tokens_deleted, result.blacklist_entries_deleted
        );

        Ok(result)
    }

    /// Start the cleanup service as a background task
    ///
    /// This spawns a tokio task that runs cleanup at regular intervals.
    /// The first cycle runs immediately.
    pub fn start_background_task(self: Arc<Self>) -> Option<tokio::task::JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_cleanup().await {
                    Ok(result) => {
                        if !result.errors.is_empty() {
                            warn!("Cleanup completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("Token cleanup cycle failed: {}", e);
                    }
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    pub expired_refresh_tokens_deleted: usize,
    pub blacklist_entries_deleted: usize,
    /// Any errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn total_cleaned(&self) -> usize {
        self.expired_refresh_tokens_deleted + self.blacklist_entries_deleted
    }
}
