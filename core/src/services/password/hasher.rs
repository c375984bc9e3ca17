//! bcrypt wrapper

use tracing::error;

use crate::errors::DomainError;

/// Hashes and checks passwords with bcrypt
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// `cost` is clamped to bcrypt's accepted range
    pub fn with_cost(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    pub fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, self.cost).map_err(|e| {
            error!("Password hashing failed: {}", e);
            DomainError::Internal {
                message: "Failed to hash password".to_string(),
            }
        })
    }

    /// A malformed stored hash counts as a mismatch
    pub fn verify(&self, plain: &str, hash: &str) -> bool {
        bcrypt::verify(plain, hash).unwrap_or(false)
    }
}
