//! # Catalog Handlers
//!
//! Product filtering, details and the optimistic favorite toggle.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Page};
use crate::app::tasks;
use crate::domain::payment::Tone;
use crate::i18n::Message;

/// Change the product type filter and reload the listing.
pub(crate) fn handle_filter_by_type(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_type: Option<String>,
) {
    {
        let mut state = state.write();
        let product_type = product_type.filter(|t| !t.trim().is_empty());
        if state.catalog.selected_type == product_type && !state.catalog.products.is_empty() {
            return;
        }
        state.catalog.selected_type = product_type;
    }
    tasks::catalog::fetch_products(state, event_tx);
}

/// Open a product's details page.
pub(crate) fn handle_open_product(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: i64) {
    {
        let mut state = state.write();
        state.current_page = Page::ProductDetails(product_id);
        if state.catalog.current_product.as_ref().map(|p| p.id) != Some(product_id) {
            state.catalog.current_product = None;
        }
    }
    tasks::catalog::fetch_product(state, event_tx, product_id);
}

/// Toggle a favorite: flip locally, then ask the server.
///
/// Guests are sent to the login page instead.
pub(crate) fn handle_toggle_favorite(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: i64) {
    let (api_client, pending) = {
        let mut state = state.write();
        if !state.is_authenticated() {
            let message = Message::LoginRequired.text(state.locale);
            state.notify(Tone::Warning, message);
            state.current_page = Page::Login;
            return;
        }

        let pending = state.favorites.begin_toggle(product_id);
        tracing::debug!(product_id, optimistic = pending.optimistic(), "Favorite toggled locally");
        (state.api_client.clone(), pending)
    };

    tokio::spawn(async move {
        let result = api_client.toggle_favorite(product_id).await;
        let _ = event_tx.send(AppEvent::FavoriteToggled { pending, result }).await;
    });
}
