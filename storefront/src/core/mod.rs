//! # Core Abstractions
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: `ApiService`, the seam between the application layer
//!   and the REST backend
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::config::StorefrontConfig;
//! use storefront::core::ApiService;
//! use storefront::services::api::ApiClient;
//!
//! let config = StorefrontConfig::default();
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config)?);
//! # Ok::<(), storefront::core::AppError>(())
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
