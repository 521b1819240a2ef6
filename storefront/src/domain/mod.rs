//! # Domain Logic
//!
//! Pure, synchronous storefront rules. Nothing here performs I/O; the
//! [`crate::app`] layer feeds these types with API results.
//!
//! - [`pricing`]: installment/resale arithmetic shared by product views and the cart
//! - [`cart`]: cart lines and derived totals
//! - [`dashboard`]: admin console tabs and actions
//! - [`favorites`]: optimistic favorite toggle
//! - [`payment`]: payment gateway return handling

pub mod cart;
pub mod dashboard;
pub mod favorites;
pub mod payment;
pub mod pricing;

pub use cart::{Cart, CartItem};
pub use dashboard::{AdminAction, DashboardTab, ImageUpload, Overview, SliderForm, TabData};
pub use favorites::{FavoriteSet, PendingToggle};
pub use payment::{PaymentResult, PaymentStatus, Tone};
pub use pricing::PriceQuote;
