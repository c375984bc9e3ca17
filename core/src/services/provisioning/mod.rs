//! Provisioning of user profiles in the user-management collaborator

mod retry;
mod traits;

pub use retry::{RetryPolicy, RetryingProvisioner};
pub use traits::UserProvisioner;
