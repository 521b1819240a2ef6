//! # Dashboard Data Transfer Objects
//!
//! Resources managed from the admin console: home page content (sliders, hero
//! banners, marquee text, footer links), discount codes, companies, contact
//! messages, investments and payouts, plus the overview statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::order::Order;

/// Home page slider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Slider {
    pub id: i64,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub title_en: Option<String>,
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Hero banner shown above the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroBanner {
    pub id: i64,
    pub title_ar: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub subtitle_ar: Option<String>,
    #[serde(default)]
    pub subtitle_en: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Scrolling announcement text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarqueeText {
    #[serde(default)]
    pub id: Option<i64>,
    pub text_ar: String,
    #[serde(default)]
    pub text_en: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Social/footer link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterLink {
    #[serde(default)]
    pub id: Option<i64>,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Discount code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountCode {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
    pub percentage: f64,
    #[serde(default)]
    pub max_uses: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Supplier company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name_ar: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Message sent through the contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Resale/installment investment made by a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub product_id: i64,
    pub amount: f64,
    pub months: u32,
    pub profit_percentage: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payout state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Pending,
    Paid,
    #[serde(other)]
    Unknown,
}

/// Scheduled payout owed to an investor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payout {
    pub id: i64,
    pub investment_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub amount: f64,
    pub status: PayoutStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

impl Payout {
    /// Still pending after its due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PayoutStatus::Pending && self.due_date.is_some_and(|due| due < today)
    }
}

/// Overview counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub pending_payouts: u64,
}

/// Severity of a dashboard alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    #[serde(other)]
    Critical,
}

/// Operational alert (low stock, overdue payout, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

/// Sales report row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub period: String,
    pub orders: u64,
    pub revenue: f64,
    #[serde(default)]
    pub installment_revenue: f64,
}

/// Recent orders block of the overview tab
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentOrders {
    #[serde(default)]
    pub orders: Vec<Order>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_overdue() {
        let payout: Payout = serde_json::from_str(
            r#"{"id": 1, "investment_id": 3, "amount": 110, "status": "pending", "due_date": "2026-01-31"}"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(payout.is_overdue(today));

        let paid = Payout {
            status: PayoutStatus::Paid,
            ..payout
        };
        assert!(!paid.is_overdue(today));
    }

    #[test]
    fn test_slider_defaults_to_active() {
        let slider: Slider = serde_json::from_str(r#"{"id": 1, "image": "/s/1.png"}"#).unwrap();
        assert!(slider.is_active);
        assert_eq!(slider.sort_order, 0);
    }
}
