//! # Catalog Data Transfer Objects
//!
//! Products, product types, installment plans and the favorite toggle.

use serde::{Deserialize, Serialize};

/// Installment/resale tier offered for a product.
///
/// The backend names the percentage `profit_percentage`; older payloads use
/// `percentage`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct InstallmentPlan {
    pub months: u32,
    #[serde(alias = "percentage")]
    pub profit_percentage: f64,
}

impl InstallmentPlan {
    pub fn new(months: u32, profit_percentage: f64) -> Self {
        Self {
            months,
            profit_percentage,
        }
    }
}

/// Product as listed in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub old_price: Option<f64>,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub sub_images: Vec<String>,
    #[serde(default)]
    pub installment_plans: Vec<InstallmentPlan>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |stock| stock > 0)
    }

    pub fn supports_installments(&self) -> bool {
        !self.installment_plans.is_empty()
    }

    /// Percentage saved against `old_price`, when the product is discounted.
    pub fn discount_percentage(&self) -> Option<f64> {
        match self.old_price {
            Some(old) if old > self.price && old > 0.0 => Some((old - self.price) / old * 100.0),
            _ => None,
        }
    }
}

/// Product category ("type")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductType {
    pub id: i64,
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// Answer of the favorite toggle endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteResponse {
    pub is_favorite: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Create/update body for admin product management
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductPayload {
    pub name_ar: String,
    pub name_en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    pub installment_plans: Vec<InstallmentPlan>,
}

/// Paginated list wrapper (`{ "data": [...] }`) used by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Wrapped { data } => data,
            ListResponse::Bare(items) => items,
        }
    }
}

/// Single item wrapper (`{ "data": {...} }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemResponse<T> {
    pub fn into_inner(self) -> T {
        match self {
            ItemResponse::Wrapped { data } => data,
            ItemResponse::Bare(item) => item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installment_plan_accepts_percentage_alias() {
        let plan: InstallmentPlan = serde_json::from_str(r#"{"months": 3, "percentage": 10}"#).unwrap();
        assert_eq!(plan, InstallmentPlan::new(3, 10.0));
    }

    #[test]
    fn test_product_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name_ar": "ثلاجة", "price": 250.5}"#).unwrap();
        assert!(product.in_stock());
        assert!(!product.is_favorite);
        assert!(!product.supports_installments());
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_discount_percentage() {
        let mut product: Product =
            serde_json::from_str(r#"{"id": 1, "name_ar": "x", "price": 75, "old_price": 100}"#).unwrap();
        assert_eq!(product.discount_percentage(), Some(25.0));

        product.old_price = Some(50.0);
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_list_response_shapes() {
        let wrapped: ListResponse<ProductType> =
            serde_json::from_str(r#"{"data": [{"id": 1, "name_ar": "أجهزة"}]}"#).unwrap();
        assert_eq!(wrapped.into_vec().len(), 1);

        let bare: ListResponse<ProductType> =
            serde_json::from_str(r#"[{"id": 1, "name_ar": "أجهزة"}, {"id": 2, "name_ar": "أثاث"}]"#).unwrap();
        assert_eq!(bare.into_vec().len(), 2);
    }
}
