//! # Cart, Order and Checkout Data Transfer Objects

use serde::{Deserialize, Serialize};

use super::catalog::InstallmentPlan;

/// Cart line as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItemDto {
    pub product_id: i64,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub installment_plans: Vec<InstallmentPlan>,
    #[serde(default)]
    pub selected_installment: Option<InstallmentPlan>,
}

/// `GET /cart` body
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartResponse {
    #[serde(default)]
    pub items: Vec<CartItemDto>,
}

/// `POST /cart` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installment_months: Option<u32>,
}

/// `PUT /cart/{product_id}` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCartItemRequest {
    pub quantity: u32,
    pub installment_months: Option<u32>,
}

/// How an order is paid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Cash,
    Installment,
}

/// Order lifecycle status as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub installment_months: Option<u32>,
}

/// Order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    pub total: f64,
    #[serde(default)]
    pub payment_type: PaymentType,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /checkout` body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub payment_type: PaymentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

/// `POST /checkout` answer: the gateway URL the customer is redirected to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub payment_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_order_status() {
        let order: Order = serde_json::from_str(
            r#"{"id": 1, "order_number": "ORD-1", "status": "on_hold", "total": 10}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert_eq!(order.payment_type, PaymentType::Cash);
    }

    #[test]
    fn test_add_to_cart_omits_missing_months() {
        let body = serde_json::to_value(AddToCartRequest {
            product_id: 4,
            quantity: 1,
            installment_months: None,
        })
        .unwrap();
        assert!(body.get("installment_months").is_none());
    }
}
