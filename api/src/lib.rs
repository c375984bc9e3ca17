//! # TeamSync Auth API
//!
//! HTTP surface of the token issuer and the request gate that every service
//! in the deployment mounts in front of its routes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
