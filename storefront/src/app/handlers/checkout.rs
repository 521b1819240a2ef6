//! # Checkout Handlers
//!
//! Checkout creates the order and returns the payment gateway URL. The
//! gateway later redirects back to the storefront with a result query.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{CheckoutRequest, PaymentType};

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Page};
use crate::domain::payment::{PaymentResult, Tone};
use crate::i18n::Message;

/// Start checkout for the current cart.
///
/// The payment type follows the cart: installment when any line has a plan.
pub(crate) fn handle_checkout(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    discount_code: Option<String>,
) {
    let (api_client, request) = {
        let mut state = state.write();
        let locale = state.locale;

        if !state.is_authenticated() {
            state.notify(Tone::Warning, Message::LoginRequired.text(locale));
            state.current_page = Page::Login;
            return;
        }
        if state.cart.is_empty() {
            state.notify(Tone::Warning, Message::CartEmpty.text(locale));
            return;
        }
        if state.checkout.in_progress {
            return;
        }

        let payment_type = if state.cart.has_installments() {
            PaymentType::Installment
        } else {
            PaymentType::Cash
        };

        state.checkout.in_progress = true;
        state.checkout.pending_redirect = None;
        (
            state.api_client.clone(),
            CheckoutRequest {
                payment_type,
                discount_code: discount_code
                    .map(|code| code.trim().to_string())
                    .filter(|code| !code.is_empty()),
            },
        )
    };

    tracing::info!(payment_type = ?request.payment_type, has_discount = request.discount_code.is_some(), "Starting checkout");
    tokio::spawn(async move {
        let result = api_client.checkout(request).await;
        let _ = event_tx.send(AppEvent::CheckoutResult(result)).await;
    });
}

/// Handle the gateway redirect back to the storefront.
///
/// Only a `success` status clears the local cart.
pub(crate) fn handle_payment_return(state: Arc<RwLock<AppState>>, query: &str) -> PaymentResult {
    let result = PaymentResult::from_query(query);

    tracing::info!(
        status = %result.status,
        order_id = ?result.order_id,
        order_number = ?result.order_number,
        invoice_status = ?result.invoice_status,
        "Payment result received"
    );

    let mut state = state.write();
    if result.clears_cart() {
        state.cart.clear();
    }
    state.checkout.in_progress = false;
    state.checkout.pending_redirect = None;
    state.payment_result = Some(result.clone());
    state.current_page = Page::PaymentResult;

    result
}
