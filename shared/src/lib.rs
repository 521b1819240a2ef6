//! # Shared Data Transfer Objects Library
//!
//! The contract between the storefront client and the marketplace REST API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, users, error bodies
//!   - **[`dto::catalog`]**: Products, types, installment plans, favorites
//!   - **[`dto::order`]**: Cart lines, orders, checkout
//!   - **[`dto::admin`]**: Dashboard resources
//! - **[`utils`]**: Display helpers (amount formatting, text truncation)
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in both Rust and JSON
//! - Bilingual resources carry `*_ar` and `*_en` fields
//! - List endpoints may answer with a bare array or `{ "data": [...] }`;
//!   [`ListResponse`] accepts both
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let request = LoginRequest {
//!     email: "sara@example.com".to_string(),
//!     password: "secret123".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://127.0.0.1:8000/api/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// DTO library: everything is public API
pub use dto::*;
pub use utils::*;
