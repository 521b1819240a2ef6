//! # Common Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! Every failure in this client is recoverable-and-reported: the caller turns
//! the error into a toast via [`AppError::user_message`], which prefers a
//! message provided by the server and otherwise uses a bilingual fallback.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced an HTTP response
//! - **Api**: the backend answered with a non-success status
//! - **Unauthorized**: the backend rejected the bearer token (401)
//! - **Decode**: the response body did not match the expected DTO
//! - **Validation**: client-side form validation, or the first field error
//!   returned by the server
//! - **State**: an action was attempted in a state that does not allow it
//! - **Config** / **Storage**: startup configuration and session file errors
//!
//! ## Usage Pattern
//!
//! ```rust
//! use storefront::core::error::AppError;
//! use storefront::i18n::{Locale, Message};
//!
//! let err = AppError::Api { status: 422, message: Some("الكود منتهي".to_string()) };
//! assert_eq!(err.user_message(Locale::En, Message::CheckoutFailed), "الكود منتهي");
//!
//! let err = AppError::Network("connection refused".to_string());
//! assert_eq!(
//!     err.user_message(Locale::En, Message::CheckoutFailed),
//!     "Could not reach the server. Check your connection and try again."
//! );
//! ```

use thiserror::Error;

use crate::i18n::{Locale, Message};

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Transport failure (DNS, refused connection, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server's message when it sent one.
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    /// Missing or rejected bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input validation error (client-side or first server field error).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Action not allowed in the current state.
    #[error("State error: {0}")]
    State(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Text for a toast: server-provided message when present, otherwise the
    /// bilingual fallback for the failed action.
    pub fn user_message(&self, locale: Locale, fallback: Message) -> String {
        match self {
            AppError::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            AppError::Validation(message) if !message.trim().is_empty() => message.clone(),
            AppError::Network(_) => Message::NetworkError.text(locale).to_string(),
            AppError::Unauthorized(_) => Message::SessionExpired.text(locale).to_string(),
            _ => fallback.text(locale).to_string(),
        }
    }

    /// Toast text for a failed login or registration.
    ///
    /// Those requests carry no token, so a 401 means the credentials were
    /// rejected: the server's message is shown instead of "session expired".
    pub fn credentials_message(&self, locale: Locale, fallback: Message) -> String {
        match self {
            AppError::Unauthorized(message) if !message.trim().is_empty() => message.clone(),
            AppError::Unauthorized(_) => fallback.text(locale).to_string(),
            other => other.user_message(locale, fallback),
        }
    }

    /// Whether the session should be dropped because of this error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins_over_fallback() {
        let err = AppError::Api {
            status: 400,
            message: Some("Out of stock".to_string()),
        };
        assert_eq!(err.user_message(Locale::Ar, Message::AddToCartFailed), "Out of stock");
    }

    #[test]
    fn test_blank_server_message_uses_fallback() {
        let err = AppError::Api {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(
            err.user_message(Locale::Ar, Message::AddToCartFailed),
            Message::AddToCartFailed.text(Locale::Ar)
        );

        let err = AppError::Decode("expected value".to_string());
        assert_eq!(
            err.user_message(Locale::En, Message::LoadProductsFailed),
            Message::LoadProductsFailed.text(Locale::En)
        );
    }

    #[test]
    fn test_unauthorized_maps_to_session_expired() {
        let err = AppError::Unauthorized("token rejected".to_string());
        assert!(err.is_unauthorized());
        assert_eq!(
            err.user_message(Locale::En, Message::LoadOrdersFailed),
            Message::SessionExpired.text(Locale::En)
        );
    }

    #[test]
    fn test_rejected_credentials_show_server_message() {
        let err = AppError::Unauthorized("Invalid credentials".to_string());
        assert_eq!(err.credentials_message(Locale::En, Message::LoginFailed), "Invalid credentials");

        let bare = AppError::Unauthorized(String::new());
        assert_eq!(
            bare.credentials_message(Locale::Ar, Message::LoginFailed),
            Message::LoginFailed.text(Locale::Ar)
        );

        let offline = AppError::Network("dns".to_string());
        assert_eq!(
            offline.credentials_message(Locale::En, Message::LoginFailed),
            Message::NetworkError.text(Locale::En)
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::Api {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "API error (404): no message");
        assert_eq!(
            AppError::Validation("Price must be positive".to_string()).to_string(),
            "Validation error: Price must be positive"
        );
    }
}
