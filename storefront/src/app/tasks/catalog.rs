//! # Catalog Tasks

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tokio::spawn;

use crate::app::events::AppEvent;
use crate::app::state::AppState;

/// Fetch the product listing for the active type filter.
pub(crate) fn fetch_products(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (api_client, product_type) = {
        let mut state = state.write();
        state.catalog.loading = true;
        (state.api_client.clone(), state.catalog.selected_type.clone())
    };

    spawn(async move {
        let result = api_client.get_products(product_type).await;
        let _ = event_tx.send(AppEvent::ProductsLoaded(result)).await;
    });
}

pub(crate) fn fetch_product_types(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = state.read().api_client.clone();

    spawn(async move {
        let result = api_client.get_product_types().await;
        let _ = event_tx.send(AppEvent::ProductTypesLoaded(result)).await;
    });
}

/// Fetch one product for the details page.
pub(crate) fn fetch_product(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: i64) {
    let api_client = {
        let mut state = state.write();
        state.catalog.loading = true;
        state.api_client.clone()
    };

    spawn(async move {
        let result = api_client.get_product(product_id).await;
        let _ = event_tx.send(AppEvent::ProductLoaded(result)).await;
    });
}
