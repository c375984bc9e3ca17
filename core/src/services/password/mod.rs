//! Password hashing, change and reset

mod hasher;
mod notifier;
mod service;

#[cfg(test)]
mod tests;

pub use hasher::PasswordHasher;
pub use notifier::ResetNotifier;
pub use service::{PasswordService, MIN_PASSWORD_LENGTH};
