//! # Backend API Client Module
//!
//! Typed wrappers around the marketplace REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient, shared request/error handling, ApiService impl
//! ├── auth.rs     - Login, register, logout, current user
//! ├── catalog.rs  - Products, product types, favorite toggle
//! ├── cart.rs     - Server-side cart
//! ├── orders.rs   - Order history and checkout
//! └── admin.rs    - Dashboard overview, tab listing, admin mutations
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod client;
pub mod orders;

pub use client::ApiClient;

#[cfg(test)]
mod tests;
