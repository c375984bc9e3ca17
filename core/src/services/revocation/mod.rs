//! Revocation store: access tokens invalidated before their natural expiry

mod service;

#[cfg(test)]
mod tests;

pub use service::{RevocationList, TokenBlacklistService};
