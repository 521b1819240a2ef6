//! # Async Tasks
//!
//! Background loads spawned on the tokio runtime. Each task marks its area
//! as loading, awaits the API, and reports back through an [`AppEvent`].
//!
//! [`AppEvent`]: crate::app::AppEvent

pub mod account;
pub mod catalog;
pub mod dashboard;
