//! Value objects returned by the issuer services.

pub mod auth_response;
pub mod profile;
pub mod user_view;

pub use auth_response::{AuthResponse, TokenRefreshResponse, BEARER_TOKEN_TYPE};
pub use profile::{NewProfile, ProfileUpdate, Registration, UserProfile};
pub use user_view::UserView;
