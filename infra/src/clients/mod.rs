//! Outbound HTTP clients
//!
//! Every call made through [`ServiceClient`] carries a bearer token minted
//! for this service at send time, so a receiving service sees the
//! `SERVICE` authority.

mod service_client;
mod user_management;


pub use service_client::ServiceClient;
pub use user_management::UserManagementClient;
