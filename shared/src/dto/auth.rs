//! # Authentication Data Transfer Objects
//!
//! Login, registration and current-user payloads, plus the error body the
//! backend returns for every failed request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Role attached to an account by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Merchant,
    #[default]
    #[serde(other)]
    Customer,
}

/// User account as exposed to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Merchants manage their own products; admins manage everything.
    pub fn can_manage_products(&self) -> bool {
        matches!(self.role, UserRole::Admin | UserRole::Merchant)
    }
}

/// `GET /me` may answer with the user wrapped in `{ "user": ... }` or bare.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

impl MeResponse {
    pub fn into_user(self) -> User {
        match self {
            MeResponse::Wrapped { user } => user,
            MeResponse::Bare(user) => user,
        }
    }
}

/// Plain acknowledgement body (`{ "message": "..." }`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error response
///
/// The backend reports either a top-level `message`/`error` string or a
/// field-level `errors` map (`{"email": ["taken"], ...}`). Map order follows
/// the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

impl ErrorResponse {
    /// First field-level error found, if any.
    ///
    /// Values may be a string or an array of strings.
    pub fn first_field_error(&self) -> Option<String> {
        let errors = self.errors.as_ref()?;
        errors.values().find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => items
                .iter()
                .find_map(|item| item.as_str().filter(|s| !s.is_empty()).map(str::to_string)),
            _ => None,
        })
    }

    /// Best message to show the user: first field error, then `message`,
    /// then `error`.
    pub fn user_message(&self) -> Option<String> {
        self.first_field_error()
            .or_else(|| self.message.clone().filter(|m| !m.is_empty()))
            .or_else(|| self.error.clone().filter(|m| !m.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_field_error_follows_payload_order() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": {
                "phone": ["The phone has already been taken."],
                "email": ["The email must be a valid email address."]
            }
        }"#;
        let error: ErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(
            error.first_field_error().as_deref(),
            Some("The phone has already been taken.")
        );
        assert_eq!(
            error.user_message().as_deref(),
            Some("The phone has already been taken.")
        );
    }

    #[test]
    fn test_user_message_falls_back_to_message_then_error() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message": "Unauthenticated."}"#).unwrap();
        assert_eq!(error.user_message().as_deref(), Some("Unauthenticated."));

        let error: ErrorResponse = serde_json::from_str(r#"{"error": "Not found"}"#).unwrap();
        assert_eq!(error.user_message().as_deref(), Some("Not found"));

        let error: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(error.user_message(), None);
    }

    #[test]
    fn test_unknown_role_maps_to_customer() {
        let user: User = serde_json::from_str(
            r#"{"id": 7, "name": "Sara", "email": "sara@example.com", "role": "investor"}"#,
        )
        .unwrap();
        assert_eq!(user.role, UserRole::Customer);
        assert!(!user.can_manage_products());
    }

    #[test]
    fn test_me_response_accepts_both_shapes() {
        let wrapped: MeResponse = serde_json::from_str(
            r#"{"user": {"id": 1, "name": "Admin", "email": "a@b.co", "role": "admin"}}"#,
        )
        .unwrap();
        assert!(wrapped.into_user().is_admin());

        let bare: MeResponse =
            serde_json::from_str(r#"{"id": 2, "name": "Ali", "email": "ali@b.co"}"#).unwrap();
        assert_eq!(bare.into_user().id, 2);
    }
}
