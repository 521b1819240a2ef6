//! # Application Orchestrator
//!
//! The [`App`] struct coordinates user actions, background tasks and the
//! shared application state of the storefront client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  App (orchestrator)                                      │
//! │  - handle_*()  user actions, validate then spawn         │
//! │  - on_tick()   drain finished task results               │
//! └────────────┬─────────────────────────────────────────────┘
//!              │
//! ┌────────────▼─────────────────────────────────────────────┐
//! │  State: Arc<RwLock<AppState>>                            │
//! │  page, session, catalog, cart, favorites, dashboard      │
//! └────────────┬─────────────────────────────────────────────┘
//!              │ async_channel (unbounded)
//! ┌────────────▼─────────────────────────────────────────────┐
//! │  Tokio tasks: ApiService calls, one AppEvent per result  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are held only while reading or applying a change; no lock is held
//! across an `.await`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use storefront::app::App;
//! use storefront::config::StorefrontConfig;
//!
//! # async fn run() -> storefront::core::Result<()> {
//! let config = StorefrontConfig::from_env()?;
//! let mut app = App::new(&config)?;
//! app.restore_session();
//! app.load_catalog();
//!
//! app.handle_add_to_cart(42, 1, Some(6));
//! while app.process_next_event().await {
//!     for toast in app.take_notifications() {
//!         println!("{}", toast.message);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use shared::RegisterRequest;

use crate::config::StorefrontConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::domain::dashboard::{AdminAction, DashboardTab};
use crate::domain::payment::PaymentResult;
use crate::i18n::Locale;
use crate::services::api::ApiClient;
use crate::services::session::{SessionStore, StoredSession};
use event_handler::AppEventHandler;

/// Storefront application orchestrator.
///
/// User actions go through the `handle_*` methods, which validate against
/// the current state and spawn background requests. Results come back as
/// [`AppEvent`]s and are applied by [`App::on_tick`] or
/// [`App::process_next_event`].
pub struct App {
    /// Shared application state. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Results of background tasks.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned task.
    event_tx: Sender<AppEvent>,

    /// Persisted bearer token.
    session: SessionStore,
}

impl App {
    /// Create the application with the HTTP client built from `config`.
    pub fn new(config: &StorefrontConfig) -> Result<Self> {
        let api_client = Arc::new(ApiClient::new(config)?);
        tracing::info!(api_base_url = %api_client.base_url(), "API client created");
        Ok(Self::with_api(api_client, config))
    }

    /// Create the application around any [`ApiService`] implementation.
    pub fn with_api(api_client: Arc<dyn ApiService>, config: &StorefrontConfig) -> Self {
        api_client.set_locale(config.default_locale);
        let state = AppState::new(api_client, config.default_locale, config.max_upload_bytes);
        let (event_tx, event_rx) = unbounded();

        tracing::info!(locale = config.default_locale.code(), "App state initialized");

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
            session: SessionStore::new(config.session_file.clone()),
        }
    }

    /// Restore a persisted session, if any, and verify it with `GET /me`.
    ///
    /// Returns `true` when a stored token was found.
    pub fn restore_session(&mut self) -> bool {
        let stored = match self.session.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, path = %self.session.path().display(), "Ignoring unreadable session file");
                if let Err(e) = self.session.clear() {
                    tracing::warn!(error = %e, "Failed to remove unreadable session file");
                }
                return false;
            }
        };

        {
            let mut state = self.state.write();
            state.auth_token = Some(stored.token.clone());
            state.locale = stored.locale;
            state.api_client.set_token(Some(stored.token));
            state.api_client.set_locale(stored.locale);
        }
        tracing::info!("Restoring stored session");
        tasks::account::fetch_current_user(self.state.clone(), self.event_tx.clone());
        true
    }

    /// Fetch the product types and the listing for the home page.
    pub fn load_catalog(&mut self) {
        tasks::catalog::fetch_product_types(self.state.clone(), self.event_tx.clone());
        tasks::catalog::fetch_products(self.state.clone(), self.event_tx.clone());
    }

    /// Apply every task result that is already available. Never blocks.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    /// Wait for the next task result and apply it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply task results until none arrives for `idle`.
    ///
    /// Returns the number of events processed.
    pub async fn process_events_until_idle(&mut self, idle: Duration) -> usize {
        let mut processed = 0;
        while let Ok(Ok(event)) = tokio::time::timeout(idle, self.event_rx.recv()).await {
            self.handle_event(event);
            processed += 1;
        }
        processed
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Toasts queued since the last call.
    pub fn take_notifications(&self) -> Vec<Notification> {
        std::mem::take(&mut self.state.write().pending_notifications)
    }

    /// Gateway URL to open after a successful checkout, consumed once.
    pub fn take_payment_redirect(&self) -> Option<String> {
        self.state.write().checkout.pending_redirect.take()
    }

    // Auth

    pub fn handle_login(&mut self, email: String, password: String) {
        handlers::auth::handle_login(self.state.clone(), self.event_tx.clone(), email, password);
    }

    pub fn handle_register(&mut self, request: RegisterRequest) {
        handlers::auth::handle_register(self.state.clone(), self.event_tx.clone(), request);
    }

    pub fn handle_logout(&mut self) {
        handlers::auth::handle_logout(self.state.clone(), self.event_tx.clone());
    }

    // Navigation

    pub fn navigate(&mut self, page: Page) {
        handlers::navigation::handle_navigate(self.state.clone(), self.event_tx.clone(), page);
    }

    /// Switch the interface language. The choice is kept with the stored
    /// session when logged in.
    pub fn set_locale(&mut self, locale: Locale) {
        handlers::navigation::handle_set_locale(self.state.clone(), locale);

        let token = self.state.read().auth_token.clone();
        if let Some(token) = token {
            if let Err(e) = self.session.save(&StoredSession { token, locale }) {
                tracing::warn!(error = %e, "Failed to persist locale");
            }
        }
    }

    pub fn toggle_locale(&mut self) {
        let locale = self.state.read().locale.toggled();
        self.set_locale(locale);
    }

    // Catalog

    pub fn handle_filter_by_type(&mut self, product_type: Option<String>) {
        handlers::catalog::handle_filter_by_type(self.state.clone(), self.event_tx.clone(), product_type);
    }

    pub fn handle_open_product(&mut self, product_id: i64) {
        handlers::catalog::handle_open_product(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_toggle_favorite(&mut self, product_id: i64) {
        handlers::catalog::handle_toggle_favorite(self.state.clone(), self.event_tx.clone(), product_id);
    }

    // Cart

    pub fn handle_add_to_cart(&mut self, product_id: i64, quantity: u32, installment_months: Option<u32>) {
        handlers::cart::handle_add_to_cart(
            self.state.clone(),
            self.event_tx.clone(),
            product_id,
            quantity,
            installment_months,
        );
    }

    pub fn handle_update_quantity(&mut self, product_id: i64, quantity: i64) {
        handlers::cart::handle_update_quantity(self.state.clone(), self.event_tx.clone(), product_id, quantity);
    }

    pub fn handle_remove_from_cart(&mut self, product_id: i64) {
        handlers::cart::handle_remove_item(self.state.clone(), self.event_tx.clone(), product_id);
    }

    pub fn handle_set_installment(&mut self, product_id: i64, installment_months: Option<u32>) {
        handlers::cart::handle_set_installment(
            self.state.clone(),
            self.event_tx.clone(),
            product_id,
            installment_months,
        );
    }

    // Checkout

    pub fn handle_checkout(&mut self, discount_code: Option<String>) {
        handlers::checkout::handle_checkout(self.state.clone(), self.event_tx.clone(), discount_code);
    }

    /// Handle the payment gateway's redirect back (query string or full URL).
    pub fn handle_payment_return(&mut self, query: &str) -> PaymentResult {
        handlers::checkout::handle_payment_return(self.state.clone(), query)
    }

    // Dashboard

    pub fn handle_select_tab(&mut self, tab: DashboardTab) {
        handlers::dashboard::handle_select_tab(self.state.clone(), self.event_tx.clone(), tab);
    }

    pub fn handle_admin_action(&mut self, action: AdminAction) {
        handlers::dashboard::handle_admin_action(self.state.clone(), self.event_tx.clone(), action);
    }
}
