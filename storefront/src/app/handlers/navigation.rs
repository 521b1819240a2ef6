//! # Navigation Handlers
//!
//! Page changes with route guards, plus the language switch.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Page};
use crate::app::tasks;
use crate::domain::payment::Tone;
use crate::i18n::{Locale, Message};

/// Navigate to a page, loading what it shows.
///
/// Guests asking for a protected page land on the login page; non-staff
/// users asking for the dashboard stay where they are.
pub(crate) fn handle_navigate(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, page: Page) {
    {
        let mut state = state.write();
        let locale = state.locale;

        if page.requires_auth() && !state.is_authenticated() {
            tracing::debug!(page = ?page, "Guest redirected to login");
            state.notify(Tone::Warning, Message::LoginRequired.text(locale));
            state.current_page = Page::Login;
            return;
        }

        // While the profile of a restored session is loading the role is unknown
        if page.requires_staff() && state.current_user.is_some() && !state.is_staff() {
            tracing::warn!(page = ?page, "Non-staff user denied");
            state.notify(Tone::Error, Message::Forbidden.text(locale));
            return;
        }

        tracing::debug!(from = ?state.current_page, to = ?page, "Navigating");
        state.current_page = page;
    }

    match page {
        Page::Home | Page::Products => tasks::catalog::fetch_products(state, event_tx),
        Page::ProductDetails(product_id) => tasks::catalog::fetch_product(state, event_tx, product_id),
        Page::Cart => tasks::account::fetch_cart(state, event_tx),
        Page::Orders => tasks::account::fetch_orders(state, event_tx),
        Page::Dashboard => {
            let tab = {
                let state = state.read();
                if state.can_open_tab(state.dashboard.active_tab) {
                    Some(state.dashboard.active_tab)
                } else if state.is_staff() {
                    Some(crate::domain::DashboardTab::Products)
                } else {
                    None
                }
            };
            if let Some(tab) = tab {
                super::dashboard::handle_select_tab(state, event_tx, tab);
            }
        }
        Page::Login | Page::Register | Page::PaymentResult => {}
    }
}

/// Switch between Arabic and English.
pub(crate) fn handle_set_locale(state: Arc<RwLock<AppState>>, locale: Locale) {
    let mut state = state.write();
    if state.locale == locale {
        return;
    }
    tracing::info!(from = state.locale.code(), to = locale.code(), "Locale changed");
    state.locale = locale;
    state.api_client.set_locale(locale);
}
