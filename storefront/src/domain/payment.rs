//! # Payment Result
//!
//! Parsing of the query string the payment gateway (MyFatoorah) appends when
//! it redirects the customer back to the storefront:
//!
//! `?status=success&order_id=42&order_number=ORD-42&message=...&invoice_status=Paid`
//!
//! The outcome branches purely on `status`. Only `success` clears the local
//! cart; every other value leaves it untouched.

use std::fmt;

use crate::i18n::{Locale, Message};

/// `status` query value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Success,
    Failed,
    Cancelled,
    Error,
    Partial,
    AlreadyProcessed,
    /// Missing or unrecognized value (kept verbatim for logging)
    Unknown(String),
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => PaymentStatus::Success,
            "failed" => PaymentStatus::Failed,
            "cancelled" | "canceled" => PaymentStatus::Cancelled,
            "error" => PaymentStatus::Error,
            "partial" => PaymentStatus::Partial,
            "already_processed" => PaymentStatus::AlreadyProcessed,
            _ => PaymentStatus::Unknown(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Success => "success",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Cancelled => "cancelled",
            PaymentStatus::Error => "error",
            PaymentStatus::Partial => "partial",
            PaymentStatus::AlreadyProcessed => "already_processed",
            PaymentStatus::Unknown(raw) => raw,
        }
    }

    /// How the result screen should be styled
    pub fn tone(&self) -> Tone {
        match self {
            PaymentStatus::Success => Tone::Success,
            PaymentStatus::AlreadyProcessed => Tone::Info,
            PaymentStatus::Cancelled | PaymentStatus::Partial | PaymentStatus::Unknown(_) => {
                Tone::Warning
            }
            PaymentStatus::Failed | PaymentStatus::Error => Tone::Error,
        }
    }

    fn messages(&self) -> (Message, Message) {
        match self {
            PaymentStatus::Success => (Message::PaymentSuccessTitle, Message::PaymentSuccessBody),
            PaymentStatus::Failed => (Message::PaymentFailedTitle, Message::PaymentFailedBody),
            PaymentStatus::Cancelled => {
                (Message::PaymentCancelledTitle, Message::PaymentCancelledBody)
            }
            PaymentStatus::Error => (Message::PaymentErrorTitle, Message::PaymentErrorBody),
            PaymentStatus::Partial => (Message::PaymentPartialTitle, Message::PaymentPartialBody),
            PaymentStatus::AlreadyProcessed => (
                Message::PaymentAlreadyProcessedTitle,
                Message::PaymentAlreadyProcessedBody,
            ),
            PaymentStatus::Unknown(_) => (Message::PaymentUnknownTitle, Message::PaymentUnknownBody),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual tone of a result screen or toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

/// Parsed gateway return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentResult {
    pub status: PaymentStatus,
    pub order_id: Option<String>,
    pub order_number: Option<String>,
    /// Free text from the backend, shown under the title when present
    pub message: Option<String>,
    /// Raw MyFatoorah invoice status
    pub invoice_status: Option<String>,
}

impl PaymentResult {
    /// Parse a query string. Accepts a bare query (`status=...`), one with a
    /// leading `?`, or a full return URL.
    pub fn from_query(query: &str) -> Self {
        let query = match query.split_once('?') {
            Some((_, rest)) => rest,
            None => query,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut status = None;
        let mut result = PaymentResult {
            status: PaymentStatus::Unknown(String::new()),
            order_id: None,
            order_number: None,
            message: None,
            invoice_status: None,
        };

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            let value = Some(value).filter(|v| !v.trim().is_empty());

            // First occurrence wins
            match decode_component(key).as_str() {
                "status" if status.is_none() => status = value,
                "order_id" if result.order_id.is_none() => result.order_id = value,
                "order_number" if result.order_number.is_none() => result.order_number = value,
                "message" if result.message.is_none() => result.message = value,
                "invoice_status" if result.invoice_status.is_none() => {
                    result.invoice_status = value
                }
                _ => {}
            }
        }

        result.status = PaymentStatus::parse(status.as_deref().unwrap_or_default());
        result
    }

    /// Whether the local cart must be emptied.
    pub fn clears_cart(&self) -> bool {
        self.status == PaymentStatus::Success
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        self.status.messages().0.text(locale)
    }

    /// Server message when present, otherwise the status description.
    pub fn body(&self, locale: Locale) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => self.status.messages().1.text(locale).to_string(),
        }
    }

    pub fn tone(&self) -> Tone {
        self.status.tone()
    }

    /// Order reference to display (number preferred over id).
    pub fn order_reference(&self) -> Option<&str> {
        self.order_number.as_deref().or(self.order_id.as_deref())
    }
}

/// Percent-decode a query component, treating `+` as a space.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
