//! Request bodies accepted by the `/auth` routes

pub mod auth;

pub use auth::*;
