//! # Dashboard
//!
//! Admin console vocabulary: the tabs, the data each tab shows, and the
//! actions an admin can take. Every action names the tab it reloads after
//! success, so the console always shows the server's state.

use std::fmt;

use chrono::NaiveDate;
use shared::{
    Alert, Company, ContactMessage, DashboardStats, DiscountCode, FooterLink, HeroBanner,
    Investment, MarqueeText, Order, Payout, Product, ProductPayload, Report, Slider, User,
};

use crate::i18n::{Locale, Message};

/// Admin console tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Overview,
    Products,
    Users,
    Sliders,
    HeroBanners,
    Marquee,
    FooterLinks,
    DiscountCodes,
    Investments,
    Payouts,
    Reports,
    ContactMessages,
    Companies,
    Orders,
}

impl DashboardTab {
    /// All tabs in sidebar order
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Overview,
            DashboardTab::Products,
            DashboardTab::Users,
            DashboardTab::Sliders,
            DashboardTab::HeroBanners,
            DashboardTab::Marquee,
            DashboardTab::FooterLinks,
            DashboardTab::DiscountCodes,
            DashboardTab::Investments,
            DashboardTab::Payouts,
            DashboardTab::Reports,
            DashboardTab::ContactMessages,
            DashboardTab::Companies,
            DashboardTab::Orders,
        ]
    }

    pub fn title(&self, locale: Locale) -> &'static str {
        let (ar, en) = match self {
            DashboardTab::Overview => ("نظرة عامة", "Overview"),
            DashboardTab::Products => ("المنتجات", "Products"),
            DashboardTab::Users => ("المستخدمون", "Users"),
            DashboardTab::Sliders => ("السلايدر", "Sliders"),
            DashboardTab::HeroBanners => ("البانرات", "Hero banners"),
            DashboardTab::Marquee => ("الشريط المتحرك", "Marquee"),
            DashboardTab::FooterLinks => ("روابط التواصل", "Footer links"),
            DashboardTab::DiscountCodes => ("أكواد الخصم", "Discount codes"),
            DashboardTab::Investments => ("الاستثمارات", "Investments"),
            DashboardTab::Payouts => ("المستحقات", "Payouts"),
            DashboardTab::Reports => ("التقارير", "Reports"),
            DashboardTab::ContactMessages => ("رسائل التواصل", "Contact messages"),
            DashboardTab::Companies => ("الشركات", "Companies"),
            DashboardTab::Orders => ("الطلبات", "Orders"),
        };
        match locale {
            Locale::Ar => ar,
            Locale::En => en,
        }
    }

    /// Merchants only see product management; every other tab is admin-only.
    pub fn merchant_visible(&self) -> bool {
        matches!(self, DashboardTab::Products)
    }

    /// Admin API path listing the tab's resource (`None` for the overview,
    /// which combines three endpoints).
    pub fn resource_path(&self) -> Option<&'static str> {
        match self {
            DashboardTab::Overview => None,
            DashboardTab::Products => Some("/admin/products"),
            DashboardTab::Users => Some("/admin/users"),
            DashboardTab::Sliders => Some("/admin/sliders"),
            DashboardTab::HeroBanners => Some("/admin/hero-banners"),
            DashboardTab::Marquee => Some("/admin/marquee"),
            DashboardTab::FooterLinks => Some("/admin/footer-links"),
            DashboardTab::DiscountCodes => Some("/admin/discount-codes"),
            DashboardTab::Investments => Some("/admin/investments"),
            DashboardTab::Payouts => Some("/admin/payouts"),
            DashboardTab::Reports => Some("/admin/reports"),
            DashboardTab::ContactMessages => Some("/admin/contact-messages"),
            DashboardTab::Companies => Some("/admin/companies"),
            DashboardTab::Orders => Some("/admin/orders"),
        }
    }
}

/// Overview tab contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub stats: DashboardStats,
    pub recent_orders: Vec<Order>,
    pub alerts: Vec<Alert>,
}

/// Data shown by one tab
#[derive(Debug, Clone, PartialEq)]
pub enum TabData {
    Overview(Overview),
    Products(Vec<Product>),
    Users(Vec<User>),
    Sliders(Vec<Slider>),
    HeroBanners(Vec<HeroBanner>),
    Marquee(Vec<MarqueeText>),
    FooterLinks(Vec<FooterLink>),
    DiscountCodes(Vec<DiscountCode>),
    Investments(Vec<Investment>),
    Payouts(Vec<Payout>),
    Reports(Vec<Report>),
    ContactMessages(Vec<ContactMessage>),
    Companies(Vec<Company>),
    Orders(Vec<Order>),
}

impl TabData {
    pub fn tab(&self) -> DashboardTab {
        match self {
            TabData::Overview(_) => DashboardTab::Overview,
            TabData::Products(_) => DashboardTab::Products,
            TabData::Users(_) => DashboardTab::Users,
            TabData::Sliders(_) => DashboardTab::Sliders,
            TabData::HeroBanners(_) => DashboardTab::HeroBanners,
            TabData::Marquee(_) => DashboardTab::Marquee,
            TabData::FooterLinks(_) => DashboardTab::FooterLinks,
            TabData::DiscountCodes(_) => DashboardTab::DiscountCodes,
            TabData::Investments(_) => DashboardTab::Investments,
            TabData::Payouts(_) => DashboardTab::Payouts,
            TabData::Reports(_) => DashboardTab::Reports,
            TabData::ContactMessages(_) => DashboardTab::ContactMessages,
            TabData::Companies(_) => DashboardTab::Companies,
            TabData::Orders(_) => DashboardTab::Orders,
        }
    }

    /// Number of rows (alerts for the overview).
    pub fn len(&self) -> usize {
        match self {
            TabData::Overview(overview) => overview.alerts.len(),
            TabData::Products(rows) => rows.len(),
            TabData::Users(rows) => rows.len(),
            TabData::Sliders(rows) => rows.len(),
            TabData::HeroBanners(rows) => rows.len(),
            TabData::Marquee(rows) => rows.len(),
            TabData::FooterLinks(rows) => rows.len(),
            TabData::DiscountCodes(rows) => rows.len(),
            TabData::Investments(rows) => rows.len(),
            TabData::Payouts(rows) => rows.len(),
            TabData::Reports(rows) => rows.len(),
            TabData::ContactMessages(rows) => rows.len(),
            TabData::Companies(rows) => rows.len(),
            TabData::Orders(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pending payouts past their due date (payouts tab only).
    pub fn overdue_payouts(&self, today: NaiveDate) -> Vec<&Payout> {
        match self {
            TabData::Payouts(payouts) => payouts.iter().filter(|p| p.is_overdue(today)).collect(),
            _ => Vec::new(),
        }
    }

    /// Unread contact messages (contact tab only).
    pub fn unread_messages(&self) -> usize {
        match self {
            TabData::ContactMessages(messages) => messages.iter().filter(|m| !m.is_read).count(),
            _ => 0,
        }
    }
}

/// Image picked for upload
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// MIME type from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let extension = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            _ => "application/octet-stream",
        }
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// New slider: text fields plus its image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliderForm {
    pub title_ar: String,
    pub title_en: String,
    pub link: Option<String>,
    pub sort_order: i32,
}

/// Mutation issued from the admin console
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    CreateProduct(ProductPayload),
    UpdateProduct(i64, ProductPayload),
    DeleteProduct(i64),
    UploadMainImage(i64, ImageUpload),
    UploadSubImages(i64, Vec<ImageUpload>),
    DeleteUser(i64),
    CreateSlider(SliderForm, ImageUpload),
    DeleteSlider(i64),
    DeleteHeroBanner(i64),
    /// Create (no id) or update the marquee text
    SaveMarquee(MarqueeText),
    /// Create (no id) or update a footer link
    SaveFooterLink(FooterLink),
    DeleteFooterLink(i64),
    CreateDiscountCode(DiscountCode),
    DeleteDiscountCode(i64),
    MarkPayoutPaid(i64),
    MarkMessageRead(i64),
    DeleteContactMessage(i64),
}

impl AdminAction {
    /// Tab reloaded after the action succeeds.
    pub fn tab(&self) -> DashboardTab {
        match self {
            AdminAction::CreateProduct(_)
            | AdminAction::UpdateProduct(..)
            | AdminAction::DeleteProduct(_)
            | AdminAction::UploadMainImage(..)
            | AdminAction::UploadSubImages(..) => DashboardTab::Products,
            AdminAction::DeleteUser(_) => DashboardTab::Users,
            AdminAction::CreateSlider(..) | AdminAction::DeleteSlider(_) => DashboardTab::Sliders,
            AdminAction::DeleteHeroBanner(_) => DashboardTab::HeroBanners,
            AdminAction::SaveMarquee(_) => DashboardTab::Marquee,
            AdminAction::SaveFooterLink(_) | AdminAction::DeleteFooterLink(_) => {
                DashboardTab::FooterLinks
            }
            AdminAction::CreateDiscountCode(_) | AdminAction::DeleteDiscountCode(_) => {
                DashboardTab::DiscountCodes
            }
            AdminAction::MarkPayoutPaid(_) => DashboardTab::Payouts,
            AdminAction::MarkMessageRead(_) | AdminAction::DeleteContactMessage(_) => {
                DashboardTab::ContactMessages
            }
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(
            self,
            AdminAction::DeleteProduct(_)
                | AdminAction::DeleteUser(_)
                | AdminAction::DeleteSlider(_)
                | AdminAction::DeleteHeroBanner(_)
                | AdminAction::DeleteFooterLink(_)
                | AdminAction::DeleteDiscountCode(_)
                | AdminAction::DeleteContactMessage(_)
        )
    }

    /// Toast shown on success.
    pub fn success_message(&self) -> Message {
        match self {
            AdminAction::MarkPayoutPaid(_) => Message::PayoutMarkedPaid,
            action if action.is_delete() => Message::DeleteSuccess,
            _ => Message::SaveSuccess,
        }
    }

    /// Fallback toast on failure when the server sent no message.
    pub fn failure_message(&self) -> Message {
        if self.is_delete() {
            Message::DeleteFailed
        } else {
            Message::SaveFailed
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            AdminAction::CreateProduct(_) => "create_product",
            AdminAction::UpdateProduct(..) => "update_product",
            AdminAction::DeleteProduct(_) => "delete_product",
            AdminAction::UploadMainImage(..) => "upload_main_image",
            AdminAction::UploadSubImages(..) => "upload_sub_images",
            AdminAction::DeleteUser(_) => "delete_user",
            AdminAction::CreateSlider(..) => "create_slider",
            AdminAction::DeleteSlider(_) => "delete_slider",
            AdminAction::DeleteHeroBanner(_) => "delete_hero_banner",
            AdminAction::SaveMarquee(_) => "save_marquee",
            AdminAction::SaveFooterLink(_) => "save_footer_link",
            AdminAction::DeleteFooterLink(_) => "delete_footer_link",
            AdminAction::CreateDiscountCode(_) => "create_discount_code",
            AdminAction::DeleteDiscountCode(_) => "delete_discount_code",
            AdminAction::MarkPayoutPaid(_) => "mark_payout_paid",
            AdminAction::MarkMessageRead(_) => "mark_message_read",
            AdminAction::DeleteContactMessage(_) => "delete_contact_message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PayoutStatus;

    fn payout(id: i64, status: PayoutStatus, due: Option<NaiveDate>) -> Payout {
        Payout {
            id,
            investment_id: 1,
            user_name: None,
            amount: 50.0,
            status,
            due_date: due,
            paid_at: None,
        }
    }

    #[test]
    fn test_every_tab_has_titles_and_a_loader() {
        for tab in DashboardTab::all() {
            assert!(!tab.title(Locale::Ar).is_empty());
            assert!(!tab.title(Locale::En).is_empty());
            assert_eq!(tab.resource_path().is_none(), *tab == DashboardTab::Overview);
        }
        assert_eq!(DashboardTab::all().len(), 14);
    }

    #[test]
    fn test_actions_reload_their_tab() {
        assert_eq!(AdminAction::MarkPayoutPaid(3).tab(), DashboardTab::Payouts);
        assert_eq!(AdminAction::DeleteFooterLink(1).tab(), DashboardTab::FooterLinks);
        assert_eq!(
            AdminAction::UploadMainImage(1, ImageUpload::new("a.png", vec![1])).tab(),
            DashboardTab::Products
        );
        assert_eq!(AdminAction::MarkMessageRead(2).tab(), DashboardTab::ContactMessages);
    }

    #[test]
    fn test_action_messages() {
        assert_eq!(AdminAction::DeleteUser(1).success_message(), Message::DeleteSuccess);
        assert_eq!(AdminAction::DeleteUser(1).failure_message(), Message::DeleteFailed);
        assert_eq!(AdminAction::MarkPayoutPaid(1).success_message(), Message::PayoutMarkedPaid);
        assert_eq!(
            AdminAction::SaveMarquee(MarqueeText {
                id: None,
                text_ar: "خصم".to_string(),
                text_en: String::new(),
                is_active: true,
            })
            .success_message(),
            Message::SaveSuccess
        );
    }

    #[test]
    fn test_overdue_payouts() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let data = TabData::Payouts(vec![
            payout(1, PayoutStatus::Pending, NaiveDate::from_ymd_opt(2025, 3, 1)),
            payout(2, PayoutStatus::Paid, NaiveDate::from_ymd_opt(2025, 3, 1)),
            payout(3, PayoutStatus::Pending, NaiveDate::from_ymd_opt(2025, 4, 1)),
            payout(4, PayoutStatus::Pending, None),
        ]);

        let overdue: Vec<i64> = data.overdue_payouts(today).iter().map(|p| p.id).collect();
        assert_eq!(overdue, vec![1]);
        assert_eq!(data.tab(), DashboardTab::Payouts);
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_image_mime_type_and_debug() {
        let image = ImageUpload::new("Photo.JPEG", vec![0; 10]);
        assert_eq!(image.mime_type(), "image/jpeg");
        assert_eq!(image.size(), 10);
        assert_eq!(format!("{:?}", image), r#"ImageUpload { file_name: "Photo.JPEG", size: 10 }"#);
        assert_eq!(ImageUpload::new("x", vec![]).mime_type(), "application/octet-stream");
    }
}
