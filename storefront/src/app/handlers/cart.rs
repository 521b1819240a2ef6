//! # Cart Handlers
//!
//! - Guests: the cart lives only in memory.
//! - Logged-in users, add: the server is asked first and the line is added
//!   locally once it accepts (stock checks happen server-side).
//! - Logged-in users, update/remove/plan change: applied locally at once,
//!   then synced; a failed sync shows a toast and re-fetches the cart.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{AddToCartRequest, UpdateCartItemRequest};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::domain::payment::Tone;
use crate::domain::{pricing, CartItem};
use crate::i18n::Message;

/// Add `quantity` units of a catalog product, optionally on a plan.
pub(crate) fn handle_add_to_cart(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
    quantity: u32,
    installment_months: Option<u32>,
) {
    let (api_client, item) = {
        let mut state = state.write();
        let locale = state.locale;

        let Some(product) = state.catalog.find_product(product_id) else {
            tracing::warn!(product_id, "Add to cart for a product that is not loaded");
            state.notify(Tone::Error, Message::AddToCartFailed.text(locale));
            return;
        };

        if quantity == 0 || !product.in_stock() {
            state.notify(Tone::Error, Message::AddToCartFailed.text(locale));
            return;
        }

        let plan = match installment_months {
            Some(months) => match pricing::select_plan(&product.installment_plans, months) {
                Some(plan) => Some(*plan),
                None => {
                    tracing::warn!(product_id, months, "Unknown installment plan requested");
                    state.notify(Tone::Error, Message::AddToCartFailed.text(locale));
                    return;
                }
            },
            None => None,
        };

        let item = CartItem::from_product(product, quantity, plan);

        if !state.is_authenticated() {
            state.cart.add_item(item);
            state.notify(Tone::Success, Message::AddedToCart.text(locale));
            return;
        }

        (state.api_client.clone(), item)
    };

    let request = AddToCartRequest {
        product_id,
        quantity,
        installment_months: item.selected_installment.map(|plan| plan.months),
    };
    tokio::spawn(async move {
        let result = api_client.add_to_cart(request).await;
        let _ = event_tx.send(AppEvent::CartItemAdded { item, result }).await;
    });
}

/// Set a line's quantity; zero or below removes it.
pub(crate) fn handle_update_quantity(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
    quantity: i64,
) {
    let sync = {
        let mut state = state.write();
        if !state.cart.contains(product_id) {
            return;
        }
        state.cart.update_quantity(product_id, quantity);

        if !state.is_authenticated() {
            return;
        }
        let months = state
            .cart
            .item(product_id)
            .and_then(|item| item.selected_installment)
            .map(|plan| plan.months);
        (state.api_client.clone(), months)
    };

    let (api_client, months) = sync;
    if quantity <= 0 {
        spawn_remove(api_client, event_tx, product_id);
    } else {
        let request = UpdateCartItemRequest {
            quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
            installment_months: months,
        };
        spawn_update(api_client, event_tx, product_id, request);
    }
}

pub(crate) fn handle_remove_item(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, product_id: i64) {
    let api_client = {
        let mut state = state.write();
        if !state.cart.remove_item(product_id) || !state.is_authenticated() {
            return;
        }
        state.api_client.clone()
    };

    spawn_remove(api_client, event_tx, product_id);
}

/// Select a line's installment plan by duration (`None` = cash).
pub(crate) fn handle_set_installment(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
    months: Option<u32>,
) {
    let (api_client, request) = {
        let mut state = state.write();
        let locale = state.locale;

        let Some(item) = state.cart.item(product_id) else {
            return;
        };

        let plan = match months {
            Some(months) => match pricing::select_plan(&item.installment_plans, months) {
                Some(plan) => Some(*plan),
                None => {
                    state.notify(Tone::Error, Message::UpdateCartFailed.text(locale));
                    return;
                }
            },
            None => None,
        };

        state.cart.set_installment(product_id, plan);

        if !state.is_authenticated() {
            return;
        }
        let quantity = state.cart.item(product_id).map_or(0, |item| item.quantity);
        (
            state.api_client.clone(),
            UpdateCartItemRequest {
                quantity,
                installment_months: plan.map(|plan| plan.months),
            },
        )
    };

    spawn_update(api_client, event_tx, product_id, request);
}

fn spawn_update(
    api_client: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    product_id: i64,
    request: UpdateCartItemRequest,
) {
    tokio::spawn(async move {
        if let Err(e) = api_client.update_cart_item(product_id, request).await {
            let _ = event_tx.send(AppEvent::CartSyncFailed(e)).await;
        }
    });
}

fn spawn_remove(api_client: Arc<dyn ApiService>, event_tx: Sender<AppEvent>, product_id: i64) {
    tokio::spawn(async move {
        if let Err(e) = api_client.remove_cart_item(product_id).await {
            let _ = event_tx.send(AppEvent::CartSyncFailed(e)).await;
        }
    });
}
