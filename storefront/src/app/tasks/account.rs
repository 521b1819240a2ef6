//! # Account Tasks
//!
//! Loads tied to the logged-in user: profile, server cart and order history.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// `GET /me` for a restored token.
pub(crate) fn fetch_current_user(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.auth_in_progress = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.me().await;
        let _ = event_tx.send(AppEvent::SessionRestored(result)).await;
    });
}

/// Re-sync the cart from the backend (authenticated users only).
pub(crate) fn fetch_cart(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        if !state.is_authenticated() {
            return;
        }
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.get_cart().await;
        let _ = event_tx.send(AppEvent::CartLoaded(result)).await;
    });
}

pub(crate) fn fetch_orders(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        if !state.is_authenticated() {
            return;
        }
        state.orders_loading = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.get_orders().await;
        let _ = event_tx.send(AppEvent::OrdersLoaded(result)).await;
    });
}
