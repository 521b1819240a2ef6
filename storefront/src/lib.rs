//! # Storefront Client - Library Root
//!
//! Client core of a bilingual (Arabic/English) marketplace: catalog browsing,
//! favorites, a cart with installment pricing, checkout through the
//! MyFatoorah payment gateway, and an admin console.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - App orchestrator, state, events, tasks    │
//! │  domain    - cart, pricing, favorites, payment result  │
//! │  services  - REST client, session file                 │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (JSON, bearer token, Accept-Language)
//!          ▼
//! ┌─────────────────────────┐      ┌───────────────────────┐
//! │  Marketplace REST API   │ ───▶ │  MyFatoorah gateway   │
//! └─────────────────────────┘      └───────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: [`app::App`] orchestrator, `Arc<RwLock<AppState>>`, `AppEvent`s
//!   sent back from Tokio tasks over an `async_channel`
//! - **core**: [`core::AppError`] and the [`core::ApiService`] trait
//! - **domain**: pure business rules, no I/O
//! - **services**: `reqwest` client for the REST API and the session store
//! - **i18n**: locales and bilingual user messages
//! - **config** / **logging**: environment configuration and `tracing` setup
//! - **utils**: form validation

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod utils;

pub use app::App;
pub use config::StorefrontConfig;
pub use crate::core::{AppError, Result};
pub use i18n::Locale;
