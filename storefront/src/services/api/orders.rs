//! # Order Endpoints
//!
//! Order history and checkout. Checkout answers with the payment gateway
//! URL; the gateway later redirects back with the result query handled by
//! [`crate::domain::payment`].

use reqwest::Method;
use shared::{CheckoutRequest, CheckoutResponse, ListResponse, Order};

use super::client::ApiClient;
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_orders(client: &ApiClient) -> Result<Vec<Order>> {
    let response: ListResponse<Order> = client
        .send_json(client.request(Method::GET, "/orders"), "get_orders")
        .await?;
    Ok(response.into_vec())
}

#[tracing::instrument(skip(client))]
pub async fn checkout(client: &ApiClient, request: CheckoutRequest) -> Result<CheckoutResponse> {
    let response: CheckoutResponse = client
        .send_json(client.request(Method::POST, "/checkout").json(&request), "checkout")
        .await?;

    tracing::info!(
        order_id = ?response.order_id,
        order_number = ?response.order_number,
        has_payment_url = response.payment_url.is_some(),
        "Checkout created"
    );
    Ok(response)
}
