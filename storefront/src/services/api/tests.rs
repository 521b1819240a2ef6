//! Client tests against a local axum backend.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{AddToCartRequest, PayoutStatus};

use super::{admin, auth, cart, catalog, ApiClient};
use crate::config::StorefrontConfig;
use crate::core::error::AppError;
use crate::domain::dashboard::{DashboardTab, ImageUpload, TabData};
use crate::i18n::Locale;

type Uploads = Arc<Mutex<Vec<(String, String, usize)>>>;

async fn spawn_backend(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(&StorefrontConfig::with_api_url(format!("http://{}/api", addr))).unwrap()
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

async fn products(headers: HeaderMap, Query(query): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if header(&headers, "authorization") != Some("Bearer 1|abc") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "Unauthenticated."})));
    }
    let locale = header(&headers, "accept-language").unwrap_or("none");
    let product_type = query.get("type").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({"data": [{
            "id": 1,
            "name_ar": "هاتف",
            "name_en": locale,
            "price": 150.0,
            "product_type": product_type,
        }]})),
    )
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "secret123" {
        (
            StatusCode::OK,
            Json(json!({
                "user": {"id": 3, "name": "Sara", "email": body["email"], "role": "merchant"},
                "token": "1|abc",
            })),
        )
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"message": "invalid", "errors": {"email": ["These credentials do not match our records."]}})),
        )
    }
}

async fn add_to_cart(Json(request): Json<AddToCartRequest>) -> (StatusCode, Json<Value>) {
    if request.quantity > 2 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"errors": {"quantity": ["Only 2 left in stock"]}})),
        );
    }
    (StatusCode::CREATED, Json(json!({"message": "Added"})))
}

async fn sub_images(Path(product_id): Path<i64>, State(uploads): State<Uploads>, mut multipart: Multipart) -> StatusCode {
    assert_eq!(product_id, 4);
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap();
        uploads.lock().push((name, content_type, bytes.len()));
    }
    StatusCode::OK
}

fn router(uploads: Uploads) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/me", get(|| async { Json(json!({"user": {"id": 3, "name": "Sara", "email": "s@x.io"}})) }))
        .route("/api/products", get(products))
        .route("/api/cart", post(add_to_cart))
        .route(
            "/api/products/{id}/favorite",
            post(|Path(id): Path<i64>| async move { Json(json!({"is_favorite": id % 2 == 0})) }),
        )
        .route(
            "/api/admin/payouts",
            get(|| async {
                Json(json!([
                    {"id": 1, "investment_id": 2, "amount": 75.5, "status": "pending", "due_date": "2025-01-31"},
                ]))
            }),
        )
        .route(
            "/api/admin/dashboard/stats",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>") }),
        )
        .route("/api/admin/products/{id}/sub-images", post(sub_images))
        .with_state(uploads)
}

#[tokio::test]
async fn test_bearer_token_and_locale_headers() {
    let client = spawn_backend(router(Uploads::default())).await;

    let err = catalog::get_products(&client, None).await.unwrap_err();
    assert!(err.is_unauthorized());

    let response = auth::login(&client, "sara@example.com".to_string(), "secret123".to_string())
        .await
        .unwrap();
    assert!(response.user.can_manage_products());
    client.set_token(Some(response.token));
    client.set_locale(Locale::En);

    let products = catalog::get_products(&client, Some("phones")).await.unwrap();
    assert_eq!(products[0].name_en, "en");
    assert_eq!(products[0].product_type.as_deref(), Some("phones"));
}

#[tokio::test]
async fn test_field_errors_become_validation_errors() {
    let client = spawn_backend(router(Uploads::default())).await;

    let err = auth::login(&client, "sara@example.com".to_string(), "wrong".to_string())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AppError::Validation("These credentials do not match our records.".to_string())
    );

    let request = AddToCartRequest {
        product_id: 1,
        quantity: 3,
        installment_months: None,
    };
    let err = cart::add_to_cart(&client, request).await.unwrap_err();
    assert_eq!(err, AppError::Validation("Only 2 left in stock".to_string()));
}

#[tokio::test]
async fn test_wrapped_and_bare_payloads() {
    let client = spawn_backend(router(Uploads::default())).await;

    let user = auth::me(&client).await.unwrap();
    assert_eq!(user.id, 3);

    let favorite = catalog::toggle_favorite(&client, 8).await.unwrap();
    assert!(favorite.is_favorite);

    match admin::load_tab(&client, DashboardTab::Payouts).await.unwrap() {
        TabData::Payouts(payouts) => {
            assert_eq!(payouts.len(), 1);
            assert_eq!(payouts[0].status, PayoutStatus::Pending);
        }
        other => panic!("unexpected tab data: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body() {
    let client = spawn_backend(router(Uploads::default())).await;

    let err = admin::get_dashboard_stats(&client).await.unwrap_err();
    assert_eq!(
        err,
        AppError::Api {
            status: 500,
            message: None
        }
    );
}

#[tokio::test]
async fn test_sub_images_are_sent_as_multipart() {
    let uploads = Uploads::default();
    let client = spawn_backend(router(uploads.clone())).await;

    let images = vec![
        ImageUpload::new("front.png", vec![1; 64]),
        ImageUpload::new("back.jpg", vec![2; 32]),
    ];
    admin::upload_sub_images(&client, 4, &images).await.unwrap();

    assert_eq!(
        *uploads.lock(),
        vec![
            ("images[]".to_string(), "image/png".to_string(), 64),
            ("images[]".to_string(), "image/jpeg".to_string(), 32),
        ]
    );

    let err = admin::upload_sub_images(&client, 4, &[]).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
