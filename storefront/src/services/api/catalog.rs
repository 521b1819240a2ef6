//! # Catalog Endpoints
//!
//! Public product listing, product details, product types and the favorite
//! toggle.

use reqwest::Method;
use shared::{FavoriteResponse, ItemResponse, ListResponse, Product, ProductType};

use super::client::ApiClient;
use crate::core::error::Result;

/// List products, optionally filtered by product type.
#[tracing::instrument(skip(client))]
pub async fn get_products(client: &ApiClient, product_type: Option<&str>) -> Result<Vec<Product>> {
    let mut request = client.request(Method::GET, "/products");
    if let Some(product_type) = product_type.filter(|t| !t.is_empty()) {
        request = request.query(&[("type", product_type)]);
    }

    let response: ListResponse<Product> = client.send_json(request, "get_products").await?;
    let products = response.into_vec();
    tracing::debug!(count = products.len(), "Products fetched");
    Ok(products)
}

/// Single product with its images and installment plans.
#[tracing::instrument(skip(client))]
pub async fn get_product(client: &ApiClient, product_id: i64) -> Result<Product> {
    let response: ItemResponse<Product> = client
        .send_json(
            client.request(Method::GET, &format!("/products/{}", product_id)),
            "get_product",
        )
        .await?;
    Ok(response.into_inner())
}

#[tracing::instrument(skip(client))]
pub async fn get_product_types(client: &ApiClient) -> Result<Vec<ProductType>> {
    let response: ListResponse<ProductType> = client
        .send_json(client.request(Method::GET, "/products/types"), "get_product_types")
        .await?;
    Ok(response.into_vec())
}

/// Flip the favorite flag; the answer carries the authoritative value.
#[tracing::instrument(skip(client))]
pub async fn toggle_favorite(client: &ApiClient, product_id: i64) -> Result<FavoriteResponse> {
    client
        .send_json(
            client.request(Method::POST, &format!("/products/{}/favorite", product_id)),
            "toggle_favorite",
        )
        .await
}
