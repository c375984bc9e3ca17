//! Profile data exchanged with the user-management collaborator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub designation: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub join_date: Option<NaiveDate>,
    pub profile_picture: Option<String>,
}

impl Registration {
    /// Profile sent to the collaborator; the password never leaves the issuer
    pub fn to_profile(&self) -> NewProfile {
        NewProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            designation: self.designation.clone(),
            birthdate: self.birthdate,
            join_date: self.join_date,
            profile_picture: self.profile_picture.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Profile update forwarded on behalf of the current user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Identifies the profile; always the authenticated email
    pub email: String,
}

/// Profile as returned by the collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}
