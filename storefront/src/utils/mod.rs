//! # Utility Functions
//!
//! - **[`validation`]**: form validation (auth, product, uploads, discount codes)
//!
//! See also [`shared::utils`] for amount formatting and text truncation.

pub mod validation;
