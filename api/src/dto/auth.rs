use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use ts_core::domain::value_objects::Registration;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    pub designation: Option<String>,

    #[serde(default)]
    pub birthdate: Option<NaiveDate>,

    #[serde(default, alias = "joinDate")]
    pub join_date: Option<NaiveDate>,

    #[serde(default, alias = "profilePicture")]
    pub profile_picture: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Registration {
            name: request.name,
            email: request.email,
            password: request.password,
            designation: request.designation,
            birthdate: request.birthdate,
            join_date: request.join_date,
            profile_picture: request.profile_picture,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[serde(alias = "refreshToken")]
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Optional body of `POST /auth/logout`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordChangeRequest {
    #[serde(alias = "currentPassword")]
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[serde(alias = "newPassword")]
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "Email must be valid"))]
    pub email: String,
}

/// Body of `POST /auth/password-reset`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PasswordResetConfirmRequest {
    #[serde(alias = "resetToken")]
    #[validate(length(min = 1, message = "Reset token is required"))]
    pub reset_token: String,

    #[serde(alias = "newPassword")]
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

/// Profile fields the current user may change
///
/// The email is taken from the authenticated principal, never from the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_camel_case_dates() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "secret1",
            "joinDate": "2024-01-15"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let registration = Registration::from(request);
        assert_eq!(registration.join_date, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_register_request_rejects_short_password_and_bad_email() {
        let request = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
            designation: None,
            birthdate: None,
            join_date: None,
            profile_picture: None,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_logout_request_refresh_token_is_optional() {
        let request: LogoutRequest = serde_json::from_str("{}").unwrap();
        assert!(request.refresh_token.is_none());

        let request: LogoutRequest =
            serde_json::from_str(r#"{"refreshToken":"abc"}"#).unwrap();
        assert_eq!(request.refresh_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_update_user_request_rejects_empty_name() {
        let request = UpdateUserRequest {
            name: Some(String::new()),
        };
        assert!(request.validate().is_err());
        assert!(UpdateUserRequest::default().validate().is_ok());
    }
}
