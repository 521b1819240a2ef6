//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Every request carries `Accept: application/json`, `Accept-Language` for
//! the active locale, an `X-Request-Id`, and the bearer token once the user
//! is logged in. Non-success answers are turned into [`AppError`]s from the
//! backend's `{ message, error, errors }` body.

use std::time::Instant;

use parking_lot::RwLock;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    AddToCartRequest, Alert, AuthResponse, CartItemDto, CheckoutRequest, CheckoutResponse,
    DashboardStats, ErrorResponse, FavoriteResponse, Order, Product, ProductType, RegisterRequest,
    UpdateCartItemRequest, User,
};
use uuid::Uuid;

use super::{admin, auth, cart, catalog, orders};
use crate::config::StorefrontConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::domain::dashboard::{AdminAction, DashboardTab, TabData};
use crate::i18n::Locale;

/// HTTP client for the marketplace REST API.
///
/// Holds a pooled `reqwest::Client`; the token and locale are swapped in
/// place on login/logout and language changes.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
    locale: RwLock<Locale>,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(None),
            locale: RwLock::new(config.default_locale),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`/products`, `/admin/users/3`, ...).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn set_locale(&self, locale: Locale) {
        *self.locale.write() = locale;
    }

    pub fn locale(&self) -> Locale {
        *self.locale.read()
    }

    /// Request builder with the common headers applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, self.url(path))
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, self.locale().code());

        match self.token.read().as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        operation: &'static str,
    ) -> Result<T> {
        let response = self.dispatch(builder, operation).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(operation, error = %e, "Response parse error");
            AppError::Decode(e.to_string())
        })
    }

    /// Send a request whose success body is irrelevant.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder, operation: &'static str) -> Result<()> {
        self.dispatch(builder, operation).await.map(|_| ())
    }

    async fn dispatch(&self, builder: RequestBuilder, operation: &'static str) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        let response = builder
            .header("X-Request-Id", &request_id)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(operation, request_id = %request_id, error = %e, "Network error");
                AppError::Network(e.to_string())
            })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_success() {
            tracing::debug!(operation, request_id = %request_id, status = status.as_u16(), duration_ms, "Request succeeded");
            return Ok(response);
        }

        let error = error_from_response(response).await;
        tracing::warn!(
            operation,
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            error = %error,
            "Request failed"
        );
        Err(error)
    }
}

// Implement ApiService trait for ApiClient
#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn set_token(&self, token: Option<String>) {
        ApiClient::set_token(self, token)
    }

    fn set_locale(&self, locale: Locale) {
        ApiClient::set_locale(self, locale)
    }

    async fn login(&self, email: String, password: String) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        auth::register(self, request).await
    }

    async fn logout(&self) -> Result<()> {
        auth::logout(self).await
    }

    async fn me(&self) -> Result<User> {
        auth::me(self).await
    }

    async fn get_products(&self, product_type: Option<String>) -> Result<Vec<Product>> {
        catalog::get_products(self, product_type.as_deref()).await
    }

    async fn get_product(&self, product_id: i64) -> Result<Product> {
        catalog::get_product(self, product_id).await
    }

    async fn get_product_types(&self) -> Result<Vec<ProductType>> {
        catalog::get_product_types(self).await
    }

    async fn toggle_favorite(&self, product_id: i64) -> Result<FavoriteResponse> {
        catalog::toggle_favorite(self, product_id).await
    }

    async fn get_cart(&self) -> Result<Vec<CartItemDto>> {
        cart::get_cart(self).await
    }

    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<()> {
        cart::add_to_cart(self, request).await
    }

    async fn update_cart_item(&self, product_id: i64, request: UpdateCartItemRequest) -> Result<()> {
        cart::update_cart_item(self, product_id, request).await
    }

    async fn remove_cart_item(&self, product_id: i64) -> Result<()> {
        cart::remove_cart_item(self, product_id).await
    }

    async fn get_orders(&self) -> Result<Vec<Order>> {
        orders::get_orders(self).await
    }

    async fn checkout(&self, request: CheckoutRequest) -> Result<CheckoutResponse> {
        orders::checkout(self, request).await
    }

    async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        admin::get_dashboard_stats(self).await
    }

    async fn get_recent_orders(&self) -> Result<Vec<Order>> {
        admin::get_recent_orders(self).await
    }

    async fn get_alerts(&self) -> Result<Vec<Alert>> {
        admin::get_alerts(self).await
    }

    async fn load_tab(&self, tab: DashboardTab) -> Result<TabData> {
        admin::load_tab(self, tab).await
    }

    async fn perform_admin_action(&self, action: AdminAction) -> Result<()> {
        admin::perform(self, action).await
    }
}

/// Map a non-success response to an [`AppError`].
///
/// - 401 becomes [`AppError::Unauthorized`]
/// - a field-level `errors` map becomes [`AppError::Validation`] with the
///   first error found
/// - anything else becomes [`AppError::Api`] with `message`/`error` if present
pub(crate) async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

pub(crate) fn error_from_body(status: StatusCode, body: &str) -> AppError {
    let parsed: Option<ErrorResponse> = serde_json::from_str(body).ok();

    if status == StatusCode::UNAUTHORIZED {
        let message = parsed.and_then(|error| error.user_message()).unwrap_or_default();
        return AppError::Unauthorized(message);
    }

    match parsed {
        Some(error) => match error.first_field_error() {
            Some(field_error) => AppError::Validation(field_error),
            None => AppError::Api {
                status: status.as_u16(),
                message: error.user_message(),
            },
        },
        None => AppError::Api {
            status: status.as_u16(),
            message: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(&StorefrontConfig::with_api_url("http://localhost:8000/api/")).unwrap();
        assert_eq!(client.url("/products"), "http://localhost:8000/api/products");
        assert_eq!(client.url("cart/3"), "http://localhost:8000/api/cart/3");
    }

    #[test]
    fn test_token_and_locale_are_swappable() {
        let client = ApiClient::new(&StorefrontConfig::default()).unwrap();
        assert_eq!(client.token(), None);
        client.set_token(Some("abc".to_string()));
        assert_eq!(client.token().as_deref(), Some("abc"));
        client.set_locale(Locale::En);
        assert_eq!(client.locale(), Locale::En);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            error_from_body(StatusCode::UNAUTHORIZED, r#"{"message": "Unauthenticated."}"#),
            AppError::Unauthorized("Unauthenticated.".to_string())
        );
        assert_eq!(
            error_from_body(StatusCode::UNAUTHORIZED, ""),
            AppError::Unauthorized(String::new())
        );
        assert_eq!(
            error_from_body(
                StatusCode::UNPROCESSABLE_ENTITY,
                r#"{"message": "invalid", "errors": {"quantity": ["Only 2 left in stock"], "product_id": ["bad"]}}"#
            ),
            AppError::Validation("Only 2 left in stock".to_string())
        );
        assert_eq!(
            error_from_body(StatusCode::NOT_FOUND, r#"{"error": "Product not found"}"#),
            AppError::Api {
                status: 404,
                message: Some("Product not found".to_string())
            }
        );
        assert_eq!(
            error_from_body(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
            AppError::Api {
                status: 502,
                message: None
            }
        );
    }
}
