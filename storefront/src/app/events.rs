//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! owner of the application state.

use shared::{
    AuthResponse, CartItemDto, CheckoutResponse, FavoriteResponse, Order, Product, ProductType,
    User,
};

use crate::core::error::{AppError, Result};
use crate::domain::dashboard::{AdminAction, DashboardTab, TabData};
use crate::domain::{CartItem, PendingToggle};

/// Async task results sent back to the state owner
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Login completed
    LoginResult(Result<AuthResponse>),
    /// Registration completed
    RegisterResult(Result<AuthResponse>),
    /// Server-side logout finished (local state is cleared either way)
    LogoutCompleted(Result<()>),
    /// `GET /me` for a stored token completed
    SessionRestored(Result<User>),
    ProductsLoaded(Result<Vec<Product>>),
    ProductTypesLoaded(Result<Vec<ProductType>>),
    ProductLoaded(Result<Product>),
    /// Favorite toggle answered; `pending` carries the pre-click value
    FavoriteToggled {
        pending: PendingToggle,
        result: Result<FavoriteResponse>,
    },
    /// Server cart snapshot received
    CartLoaded(Result<Vec<CartItemDto>>),
    /// Remote add-to-cart finished; the line is added locally on success
    CartItemAdded {
        item: CartItem,
        result: Result<()>,
    },
    /// A cart update/remove failed remotely after being applied locally
    CartSyncFailed(AppError),
    OrdersLoaded(Result<Vec<Order>>),
    CheckoutResult(Result<CheckoutResponse>),
    DashboardTabLoaded {
        tab: DashboardTab,
        result: Result<TabData>,
    },
    AdminActionCompleted {
        action: AdminAction,
        result: Result<()>,
    },
}

impl AppEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            AppEvent::LoginResult(_) => "LoginResult",
            AppEvent::RegisterResult(_) => "RegisterResult",
            AppEvent::LogoutCompleted(_) => "LogoutCompleted",
            AppEvent::SessionRestored(_) => "SessionRestored",
            AppEvent::ProductsLoaded(_) => "ProductsLoaded",
            AppEvent::ProductTypesLoaded(_) => "ProductTypesLoaded",
            AppEvent::ProductLoaded(_) => "ProductLoaded",
            AppEvent::FavoriteToggled { .. } => "FavoriteToggled",
            AppEvent::CartLoaded(_) => "CartLoaded",
            AppEvent::CartItemAdded { .. } => "CartItemAdded",
            AppEvent::CartSyncFailed(_) => "CartSyncFailed",
            AppEvent::OrdersLoaded(_) => "OrdersLoaded",
            AppEvent::CheckoutResult(_) => "CheckoutResult",
            AppEvent::DashboardTabLoaded { .. } => "DashboardTabLoaded",
            AppEvent::AdminActionCompleted { .. } => "AdminActionCompleted",
        }
    }
}
