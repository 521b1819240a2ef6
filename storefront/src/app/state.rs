//! # Application State Types
//!
//! All state held by the storefront client: current page, session, catalog,
//! cart, favorites, orders, checkout, payment result, dashboard and pending
//! notifications.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use shared::{Order, Product, ProductType, User};

use crate::core::service::ApiService;
use crate::domain::dashboard::{DashboardTab, TabData};
use crate::domain::payment::{PaymentResult, Tone};
use crate::domain::pricing::{self, PriceQuote};
use crate::domain::{Cart, FavoriteSet};
use crate::i18n::Locale;

/// Application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    ProductDetails(i64),
    Cart,
    Orders,
    Login,
    Register,
    /// Landing page of the payment gateway redirect
    PaymentResult,
    Dashboard,
}

impl Page {
    /// Pages that send guests to the login page
    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Orders | Page::Dashboard)
    }

    /// Pages restricted to staff accounts (admin or merchant)
    pub fn requires_staff(&self) -> bool {
        matches!(self, Page::Dashboard)
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        let (ar, en) = match self {
            Page::Home => ("الرئيسية", "Home"),
            Page::Products => ("المنتجات", "Products"),
            Page::ProductDetails(_) => ("تفاصيل المنتج", "Product details"),
            Page::Cart => ("سلة التسوق", "Cart"),
            Page::Orders => ("طلباتي", "My orders"),
            Page::Login => ("تسجيل الدخول", "Login"),
            Page::Register => ("إنشاء حساب", "Register"),
            Page::PaymentResult => ("نتيجة الدفع", "Payment result"),
            Page::Dashboard => ("لوحة التحكم", "Dashboard"),
        };
        match locale {
            Locale::Ar => ar,
            Locale::En => en,
        }
    }
}

/// Catalog listing and product details
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub product_types: Vec<ProductType>,
    /// Active type filter (`?type=`)
    pub selected_type: Option<String>,
    /// Product shown on the details page
    pub current_product: Option<Product>,
    pub loading: bool,
}

impl CatalogState {
    /// Product by id from the listing or the details page.
    pub fn find_product(&self, product_id: i64) -> Option<&Product> {
        self.current_product
            .iter()
            .chain(self.products.iter())
            .find(|product| product.id == product_id)
    }

    /// Price breakdown shown on the product page for `quantity` units.
    ///
    /// `None` when the product is unknown or does not offer a `months` plan.
    pub fn quote(&self, product_id: i64, quantity: u32, months: Option<u32>) -> Option<PriceQuote> {
        let product = self.find_product(product_id)?;
        let plan = match months {
            Some(months) => Some(pricing::select_plan(&product.installment_plans, months)?),
            None => None,
        };
        Some(pricing::quote(product.price, quantity, plan))
    }

    /// "From X / month" figure for listing cards: one unit under the
    /// cheapest plan.
    pub fn starting_monthly(&self, product_id: i64) -> Option<(f64, u32)> {
        let product = self.find_product(product_id)?;
        let plan = pricing::cheapest_plan(&product.installment_plans)?;
        Some((pricing::monthly_payment(product.price, plan), plan.months))
    }
}

/// Checkout progress
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    pub in_progress: bool,
    pub order_number: Option<String>,
    /// Gateway URL the customer must be sent to
    pub pending_redirect: Option<String>,
}

/// Admin console state
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    /// Last loaded data per tab
    pub tabs: HashMap<DashboardTab, TabData>,
    /// Tabs with a load in flight
    pub loading: HashSet<DashboardTab>,
    /// Admin action awaiting the server
    pub action_in_progress: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::Overview,
            tabs: HashMap::new(),
            loading: HashSet::new(),
            action_in_progress: false,
        }
    }
}

impl DashboardState {
    pub fn active_data(&self) -> Option<&TabData> {
        self.tabs.get(&self.active_tab)
    }

    /// Whether the tab on screen is still waiting for data.
    pub fn is_loading(&self) -> bool {
        self.loading.contains(&self.active_tab)
    }
}

/// Toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub tone: Tone,
    pub message: String,
}

impl Notification {
    pub fn new(tone: Tone, message: impl Into<String>) -> Self {
        Self {
            tone,
            message: message.into(),
        }
    }
}

/// Global application state
pub struct AppState {
    pub current_page: Page,
    pub locale: Locale,
    /// Bearer token (once logged in or restored)
    pub auth_token: Option<String>,
    pub current_user: Option<User>,
    /// Login/register/restore request in flight
    pub auth_in_progress: bool,
    pub catalog: CatalogState,
    pub cart: Cart,
    pub favorites: FavoriteSet,
    pub orders: Vec<Order>,
    pub orders_loading: bool,
    pub checkout: CheckoutState,
    /// Parsed gateway return, shown on [`Page::PaymentResult`]
    pub payment_result: Option<PaymentResult>,
    pub dashboard: DashboardState,
    /// Toasts waiting to be displayed
    pub pending_notifications: Vec<Notification>,
    /// Largest image accepted by upload forms
    pub max_upload_bytes: u64,
    pub api_client: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api_client: Arc<dyn ApiService>, locale: Locale, max_upload_bytes: u64) -> Self {
        Self {
            current_page: Page::Home,
            locale,
            auth_token: None,
            current_user: None,
            auth_in_progress: false,
            catalog: CatalogState::default(),
            cart: Cart::new(),
            favorites: FavoriteSet::new(),
            orders: Vec::new(),
            orders_loading: false,
            checkout: CheckoutState::default(),
            payment_result: None,
            dashboard: DashboardState::default(),
            pending_notifications: Vec::new(),
            max_upload_bytes,
            api_client,
        }
    }

    /// Check if user is authenticated (has a bearer token)
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(User::is_admin)
    }

    /// Admin or merchant
    pub fn is_staff(&self) -> bool {
        self.current_user.as_ref().is_some_and(User::can_manage_products)
    }

    /// Whether the current user may open a dashboard tab.
    pub fn can_open_tab(&self, tab: DashboardTab) -> bool {
        self.is_admin() || (self.is_staff() && tab.merchant_visible())
    }

    pub fn notify(&mut self, tone: Tone, message: impl Into<String>) {
        let notification = Notification::new(tone, message);
        tracing::debug!(tone = ?notification.tone, message = %notification.message, "Notification queued");
        self.pending_notifications.push(notification);
    }

    /// Drop everything tied to the logged-in user.
    pub fn clear_session(&mut self) {
        self.auth_token = None;
        self.current_user = None;
        self.auth_in_progress = false;
        self.cart.clear();
        self.favorites.clear();
        self.orders.clear();
        self.checkout = CheckoutState::default();
        self.dashboard = DashboardState::default();
        self.api_client.set_token(None);
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("current_page", &self.current_page)
            .field("locale", &self.locale)
            .field("authenticated", &self.is_authenticated())
            .field("user", &self.current_user.as_ref().map(|u| u.id))
            .field("cart_items", &self.cart.item_count())
            .field("favorites", &self.favorites.len())
            .field("pending_notifications", &self.pending_notifications.len())
            .finish_non_exhaustive()
    }
}
