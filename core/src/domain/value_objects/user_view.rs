//! Client-facing view of an account.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Credential;

use super::profile::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,

    // Enriched from the user-management service when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
}

impl UserView {
    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile_picture = profile.profile_picture;
        self.designation = profile.designation;
        self.birthdate = profile.birthdate;
        self.join_date = profile.join_date;
        self
    }
}

impl From<&Credential> for UserView {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id,
            name: credential.name.clone(),
            email: credential.email.clone(),
            is_active: credential.is_active,
            created_at: credential.created_at,
            last_login_at: credential.last_login_at,
            profile_picture: None,
            designation: None,
            birthdate: None,
            join_date: None,
        }
    }
}
