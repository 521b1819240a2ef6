//! # Event Handler
//!
//! Applies async task results to the application state.
//!
//! Each event takes the write lock once, for as short as possible. Follow-up
//! work (re-fetching the cart, reloading a dashboard tab) is started after the
//! lock is released.

use shared::{AuthResponse, CartItemDto, CheckoutResponse, FavoriteResponse, Order, Product, ProductType, User};

use crate::app::events::AppEvent;
use crate::app::state::Page;
use crate::app::{tasks, App};
use crate::core::error::{AppError, Result};
use crate::domain::dashboard::{AdminAction, DashboardTab, TabData};
use crate::domain::payment::Tone;
use crate::domain::{CartItem, PendingToggle};
use crate::i18n::Message;
use crate::services::session::StoredSession;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.name(), "Handling event");

        match event {
            AppEvent::LoginResult(result) => self.handle_auth_result(result, Message::LoginSuccess, Message::LoginFailed),
            AppEvent::RegisterResult(result) => {
                self.handle_auth_result(result, Message::RegisterSuccess, Message::RegisterFailed)
            }
            AppEvent::LogoutCompleted(result) => self.handle_logout_completed(result),
            AppEvent::SessionRestored(result) => self.handle_session_restored(result),
            AppEvent::ProductsLoaded(result) => self.handle_products_loaded(result),
            AppEvent::ProductTypesLoaded(result) => self.handle_product_types_loaded(result),
            AppEvent::ProductLoaded(result) => self.handle_product_loaded(result),
            AppEvent::FavoriteToggled { pending, result } => self.handle_favorite_toggled(pending, result),
            AppEvent::CartLoaded(result) => self.handle_cart_loaded(result),
            AppEvent::CartItemAdded { item, result } => self.handle_cart_item_added(item, result),
            AppEvent::CartSyncFailed(error) => self.handle_cart_sync_failed(error),
            AppEvent::OrdersLoaded(result) => self.handle_orders_loaded(result),
            AppEvent::CheckoutResult(result) => self.handle_checkout_result(result),
            AppEvent::DashboardTabLoaded { tab, result } => self.handle_dashboard_tab_loaded(tab, result),
            AppEvent::AdminActionCompleted { action, result } => self.handle_admin_action_completed(action, result),
        }
    }
}

impl App {
    /// Common failure path: a rejected token ends the session, anything else
    /// becomes a toast.
    ///
    /// Returns `true` when the session was ended.
    fn report_error(&mut self, error: &AppError, fallback: Message) -> bool {
        if error.is_unauthorized() {
            self.expire_session();
            return true;
        }

        let mut state = self.state.write();
        let message = error.user_message(state.locale, fallback);
        state.notify(Tone::Error, message);
        false
    }

    fn expire_session(&mut self) {
        tracing::warn!("Session rejected by the server, logging out locally");
        {
            let mut state = self.state.write();
            state.clear_session();
            let message = Message::SessionExpired.text(state.locale);
            state.notify(Tone::Warning, message);
            state.current_page = Page::Login;
        }
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    fn handle_auth_result(&mut self, result: Result<AuthResponse>, success: Message, failure: Message) {
        tracing::info!(success = result.is_ok(), "Processing auth result");

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let mut state = self.state.write();
                state.auth_in_progress = false;
                tracing::warn!(error = %e, "Authentication rejected");
                let message = e.credentials_message(state.locale, failure);
                state.notify(Tone::Error, message);
                return;
            }
        };

        let locale = {
            let mut state = self.state.write();
            state.auth_in_progress = false;
            state.auth_token = Some(response.token.clone());
            state.api_client.set_token(Some(response.token.clone()));
            tracing::info!(user_id = response.user.id, role = ?response.user.role, "Logged in");
            state.current_user = Some(response.user);
            let message = response
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| success.text(state.locale).to_string());
            state.notify(Tone::Success, message);
            state.current_page = Page::Home;
            state.locale
        };

        let stored = StoredSession {
            token: response.token,
            locale,
        };
        if let Err(e) = self.session.save(&stored) {
            tracing::warn!(error = %e, "Failed to persist session");
        }

        // The server cart replaces the guest cart; products are re-fetched for is_favorite
        tasks::account::fetch_cart(self.state.clone(), self.event_tx.clone());
        tasks::catalog::fetch_products(self.state.clone(), self.event_tx.clone());
    }

    fn handle_logout_completed(&mut self, result: Result<()>) {
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Server logout failed, clearing local session anyway");
        }

        {
            let mut state = self.state.write();
            state.clear_session();
            let message = Message::LogoutSuccess.text(state.locale);
            state.notify(Tone::Success, message);
            state.current_page = Page::Home;
        }
        if let Err(e) = self.session.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }

        tasks::catalog::fetch_products(self.state.clone(), self.event_tx.clone());
    }

    fn handle_session_restored(&mut self, result: Result<User>) {
        match result {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Session restored");
                {
                    let mut state = self.state.write();
                    state.auth_in_progress = false;
                    state.current_user = Some(user);
                }
                tasks::account::fetch_cart(self.state.clone(), self.event_tx.clone());
            }
            Err(e) => {
                self.state.write().auth_in_progress = false;
                // Other failures keep the token; the next request retries it
                self.report_error(&e, Message::UnexpectedError);
            }
        }
    }

    fn handle_products_loaded(&mut self, result: Result<Vec<Product>>) {
        match result {
            Ok(products) => {
                let mut state = self.state.write();
                state.catalog.loading = false;
                if state.is_authenticated() {
                    state.favorites.seed(&products);
                }
                tracing::debug!(count = products.len(), "Products loaded");
                state.catalog.products = products;
            }
            Err(e) => {
                self.state.write().catalog.loading = false;
                self.report_error(&e, Message::LoadProductsFailed);
            }
        }
    }

    fn handle_product_types_loaded(&mut self, result: Result<Vec<ProductType>>) {
        match result {
            Ok(types) => self.state.write().catalog.product_types = types,
            Err(e) => {
                // The filter bar simply stays empty
                tracing::warn!(error = %e, "Failed to load product types");
            }
        }
    }

    fn handle_product_loaded(&mut self, result: Result<Product>) {
        match result {
            Ok(product) => {
                let mut state = self.state.write();
                state.catalog.loading = false;
                if state.is_authenticated() {
                    state.favorites.sync_product(&product);
                }
                state.catalog.current_product = Some(product);
            }
            Err(e) => {
                self.state.write().catalog.loading = false;
                self.report_error(&e, Message::LoadProductFailed);
            }
        }
    }

    fn handle_favorite_toggled(&mut self, pending: PendingToggle, result: Result<FavoriteResponse>) {
        match result {
            Ok(response) => {
                let mut state = self.state.write();
                // Logged out while in flight: the set was already cleared
                if !state.is_authenticated() {
                    return;
                }
                state.favorites.confirm(pending, response.is_favorite);
                let message = response.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| {
                    let key = if response.is_favorite {
                        Message::FavoriteAdded
                    } else {
                        Message::FavoriteRemoved
                    };
                    key.text(state.locale).to_string()
                });
                state.notify(Tone::Success, message);
            }
            Err(_) if !self.state.read().is_authenticated() => {}
            Err(e) => {
                tracing::warn!(product_id = pending.product_id, error = %e, "Favorite toggle failed, reverting");
                self.state.write().favorites.revert(pending);
                self.report_error(&e, Message::FavoriteFailed);
            }
        }
    }

    fn handle_cart_loaded(&mut self, result: Result<Vec<CartItemDto>>) {
        match result {
            Ok(items) => {
                let mut state = self.state.write();
                // A response arriving after logout is stale
                if !state.is_authenticated() {
                    return;
                }
                state.cart.replace_items(items.into_iter().map(CartItem::from).collect());
                tracing::debug!(items = state.cart.items().len(), total = state.cart.total(), "Cart synced");
            }
            Err(e) => {
                self.report_error(&e, Message::LoadCartFailed);
            }
        }
    }

    fn handle_cart_item_added(&mut self, item: CartItem, result: Result<()>) {
        match result {
            Ok(()) => {
                let mut state = self.state.write();
                if !state.is_authenticated() {
                    tracing::debug!(product_id = item.product_id, "Dropping cart addition answered after logout");
                    return;
                }
                state.cart.add_item(item);
                let message = Message::AddedToCart.text(state.locale);
                state.notify(Tone::Success, message);
            }
            Err(e) => {
                self.report_error(&e, Message::AddToCartFailed);
            }
        }
    }

    fn handle_cart_sync_failed(&mut self, error: AppError) {
        tracing::warn!(error = %error, "Cart change rejected by the server, re-syncing");
        if !self.report_error(&error, Message::UpdateCartFailed) {
            tasks::account::fetch_cart(self.state.clone(), self.event_tx.clone());
        }
    }

    fn handle_orders_loaded(&mut self, result: Result<Vec<Order>>) {
        self.state.write().orders_loading = false;
        match result {
            Ok(orders) => self.state.write().orders = orders,
            Err(e) => {
                self.report_error(&e, Message::LoadOrdersFailed);
            }
        }
    }

    fn handle_checkout_result(&mut self, result: Result<CheckoutResponse>) {
        self.state.write().checkout.in_progress = false;
        match result {
            Ok(response) => {
                tracing::info!(
                    order_id = ?response.order_id,
                    order_number = ?response.order_number,
                    "Order created, awaiting payment"
                );
                let mut state = self.state.write();
                state.checkout.order_number = response.order_number;
                match response.payment_url.filter(|url| !url.is_empty()) {
                    Some(url) => {
                        state.checkout.pending_redirect = Some(url);
                        let message = Message::RedirectingToPayment.text(state.locale);
                        state.notify(Tone::Info, message);
                    }
                    None => {
                        let message = response
                            .message
                            .unwrap_or_else(|| Message::CheckoutFailed.text(state.locale).to_string());
                        state.notify(Tone::Error, message);
                    }
                }
            }
            Err(e) => {
                self.report_error(&e, Message::CheckoutFailed);
            }
        }
    }

    fn handle_dashboard_tab_loaded(&mut self, tab: DashboardTab, result: Result<TabData>) {
        self.state.write().dashboard.loading.remove(&tab);
        match result {
            Ok(data) => {
                tracing::debug!(tab = ?tab, rows = data.len(), "Dashboard tab loaded");
                self.state.write().dashboard.tabs.insert(tab, data);
            }
            Err(e) => {
                self.report_error(&e, Message::LoadDashboardFailed);
            }
        }
    }

    fn handle_admin_action_completed(&mut self, action: AdminAction, result: Result<()>) {
        self.state.write().dashboard.action_in_progress = false;
        match result {
            Ok(()) => {
                tracing::info!(action = action.name(), "Admin action succeeded");
                {
                    let mut state = self.state.write();
                    let message = action.success_message().text(state.locale);
                    state.notify(Tone::Success, message);
                }
                tasks::dashboard::load_tab(self.state.clone(), self.event_tx.clone(), action.tab());
            }
            Err(e) => {
                tracing::warn!(action = action.name(), error = %e, "Admin action failed");
                self.report_error(&e, action.failure_message());
            }
        }
    }
}
