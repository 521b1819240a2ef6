//! # External Services
//!
//! - **[`api`]**: REST client for the marketplace backend
//! - **[`session`]**: bearer token persistence between runs

pub mod api;
pub mod session;

pub use api::ApiClient;
pub use session::{SessionStore, StoredSession};
