//! # Service Traits
//!
//! Traits for dependency injection, so the application layer can be driven
//! by a mock backend in tests.

use async_trait::async_trait;
use shared::{
    AddToCartRequest, Alert, AuthResponse, CartItemDto, CheckoutRequest, CheckoutResponse,
    DashboardStats, FavoriteResponse, Order, Product, ProductType, RegisterRequest,
    UpdateCartItemRequest, User,
};

use crate::core::error::Result;
use crate::domain::dashboard::{AdminAction, DashboardTab, TabData};
use crate::i18n::Locale;

/// Trait for API service operations
///
/// Implemented by [`crate::services::api::ApiClient`]; tests substitute a
/// mock.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Bearer token attached to subsequent requests (`None` after logout)
    fn set_token(&self, token: Option<String>);

    /// Language sent as `Accept-Language`
    fn set_locale(&self, locale: Locale);

    // Auth
    async fn login(&self, email: String, password: String) -> Result<AuthResponse>;
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;
    async fn logout(&self) -> Result<()>;
    async fn me(&self) -> Result<User>;

    // Catalog
    async fn get_products(&self, product_type: Option<String>) -> Result<Vec<Product>>;
    async fn get_product(&self, product_id: i64) -> Result<Product>;
    async fn get_product_types(&self) -> Result<Vec<ProductType>>;
    async fn toggle_favorite(&self, product_id: i64) -> Result<FavoriteResponse>;

    // Cart
    async fn get_cart(&self) -> Result<Vec<CartItemDto>>;
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<()>;
    async fn update_cart_item(&self, product_id: i64, request: UpdateCartItemRequest) -> Result<()>;
    async fn remove_cart_item(&self, product_id: i64) -> Result<()>;

    // Orders
    async fn get_orders(&self) -> Result<Vec<Order>>;
    async fn checkout(&self, request: CheckoutRequest) -> Result<CheckoutResponse>;

    // Dashboard
    async fn get_dashboard_stats(&self) -> Result<DashboardStats>;
    async fn get_recent_orders(&self) -> Result<Vec<Order>>;
    async fn get_alerts(&self) -> Result<Vec<Alert>>;

    /// Rows of a resource tab (not the overview)
    async fn load_tab(&self, tab: DashboardTab) -> Result<TabData>;

    async fn perform_admin_action(&self, action: AdminAction) -> Result<()>;
}
