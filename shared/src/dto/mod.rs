//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, current user, error bodies
//! - [`catalog`] - Products, product types, installment plans, favorites
//! - [`order`] - Cart lines, orders, checkout
//! - [`admin`] - Dashboard resources and statistics
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: `#[serde(default)]` on read, omitted when `None` on write
//! - **Enums**: snake_case/lowercase strings, unknown values fall back to a
//!   catch-all variant
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! { "email": "sara@example.com", "password": "secret123" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! {
//!   "user": { "id": 7, "name": "Sara", "email": "sara@example.com", "role": "customer" },
//!   "token": "12|hQ9x...",
//!   "message": "Logged in"
//! }
//! ```

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod order;

pub use admin::*;
pub use auth::*;
pub use catalog::*;
pub use order::*;
