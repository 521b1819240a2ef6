//! # Action Handlers
//!
//! User actions organized by area. Handlers validate input, apply
//! optimistic local changes, and spawn the API call whose result comes back
//! as an [`AppEvent`](crate::app::AppEvent).

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod navigation;
