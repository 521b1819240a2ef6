//! # Cart Endpoints

use reqwest::Method;
use shared::{AddToCartRequest, CartItemDto, CartResponse, UpdateCartItemRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Server-side cart of the logged-in user.
#[tracing::instrument(skip(client))]
pub async fn get_cart(client: &ApiClient) -> Result<Vec<CartItemDto>> {
    let response: CartResponse = client
        .send_json(client.request(Method::GET, "/cart"), "get_cart")
        .await?;
    Ok(response.items)
}

#[tracing::instrument(skip(client))]
pub async fn add_to_cart(client: &ApiClient, request: AddToCartRequest) -> Result<()> {
    client
        .send_empty(client.request(Method::POST, "/cart").json(&request), "add_to_cart")
        .await
}

#[tracing::instrument(skip(client))]
pub async fn update_cart_item(
    client: &ApiClient,
    product_id: i64,
    request: UpdateCartItemRequest,
) -> Result<()> {
    client
        .send_empty(
            client
                .request(Method::PUT, &format!("/cart/{}", product_id))
                .json(&request),
            "update_cart_item",
        )
        .await
}

#[tracing::instrument(skip(client))]
pub async fn remove_cart_item(client: &ApiClient, product_id: i64) -> Result<()> {
    client
        .send_empty(
            client.request(Method::DELETE, &format!("/cart/{}", product_id)),
            "remove_cart_item",
        )
        .await
}
