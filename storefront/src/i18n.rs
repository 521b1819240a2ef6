//! # Localization
//!
//! Arabic/English locale handling and the catalog of user-facing messages
//! (toast texts, payment result screens, dashboard tab titles).
//!
//! Arabic is the default locale and is rendered right-to-left.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Active interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// The other language (language switch button).
    pub fn toggled(&self) -> Locale {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    /// Pick the localized variant of a bilingual field, falling back to the
    /// other language when the preferred one is blank.
    pub fn pick<'a>(&self, ar: &'a str, en: &'a str) -> &'a str {
        let (preferred, other) = match self {
            Locale::Ar => (ar, en),
            Locale::En => (en, ar),
        };
        if preferred.trim().is_empty() {
            other
        } else {
            preferred
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "ar-sa" | "ar-kw" | "arabic" => Ok(Locale::Ar),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// User-facing message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    // Generic
    NetworkError,
    SessionExpired,
    UnexpectedError,
    LoginRequired,
    Forbidden,

    // Auth
    LoginSuccess,
    LoginFailed,
    RegisterSuccess,
    RegisterFailed,
    LogoutSuccess,

    // Catalog
    LoadProductsFailed,
    LoadProductFailed,
    FavoriteAdded,
    FavoriteRemoved,
    FavoriteFailed,

    // Cart
    AddedToCart,
    AddToCartFailed,
    UpdateCartFailed,
    LoadCartFailed,
    CartEmpty,

    // Orders / checkout
    LoadOrdersFailed,
    CheckoutFailed,
    RedirectingToPayment,

    // Payment result
    PaymentSuccessTitle,
    PaymentSuccessBody,
    PaymentFailedTitle,
    PaymentFailedBody,
    PaymentCancelledTitle,
    PaymentCancelledBody,
    PaymentErrorTitle,
    PaymentErrorBody,
    PaymentPartialTitle,
    PaymentPartialBody,
    PaymentAlreadyProcessedTitle,
    PaymentAlreadyProcessedBody,
    PaymentUnknownTitle,
    PaymentUnknownBody,

    // Dashboard
    LoadDashboardFailed,
    SaveSuccess,
    SaveFailed,
    DeleteSuccess,
    DeleteFailed,
    PayoutMarkedPaid,
}

impl Message {
    /// Localized text.
    pub fn text(&self, locale: Locale) -> &'static str {
        let (ar, en) = self.pair();
        match locale {
            Locale::Ar => ar,
            Locale::En => en,
        }
    }

    fn pair(&self) -> (&'static str, &'static str) {
        match self {
            Message::NetworkError => (
                "تعذر الاتصال بالخادم. تحقق من اتصالك وحاول مرة أخرى.",
                "Could not reach the server. Check your connection and try again.",
            ),
            Message::SessionExpired => (
                "انتهت الجلسة، يرجى تسجيل الدخول مرة أخرى.",
                "Your session has expired. Please log in again.",
            ),
            Message::UnexpectedError => ("حدث خطأ غير متوقع.", "An unexpected error occurred."),
            Message::LoginRequired => ("يرجى تسجيل الدخول أولاً.", "Please log in first."),
            Message::Forbidden => (
                "ليس لديك صلاحية للوصول إلى هذه الصفحة.",
                "You do not have permission to access this page.",
            ),

            Message::LoginSuccess => ("تم تسجيل الدخول بنجاح.", "Logged in successfully."),
            Message::LoginFailed => (
                "فشل تسجيل الدخول. تحقق من البيانات.",
                "Login failed. Check your credentials.",
            ),
            Message::RegisterSuccess => ("تم إنشاء الحساب بنجاح.", "Account created successfully."),
            Message::RegisterFailed => ("فشل إنشاء الحساب.", "Registration failed."),
            Message::LogoutSuccess => ("تم تسجيل الخروج.", "Logged out."),

            Message::LoadProductsFailed => ("فشل تحميل المنتجات.", "Failed to load products."),
            Message::LoadProductFailed => ("فشل تحميل المنتج.", "Failed to load the product."),
            Message::FavoriteAdded => ("تمت الإضافة إلى المفضلة.", "Added to favorites."),
            Message::FavoriteRemoved => ("تمت الإزالة من المفضلة.", "Removed from favorites."),
            Message::FavoriteFailed => ("فشل تحديث المفضلة.", "Failed to update favorites."),

            Message::AddedToCart => ("تمت الإضافة إلى السلة.", "Added to cart."),
            Message::AddToCartFailed => ("فشل إضافة المنتج إلى السلة.", "Failed to add the product to the cart."),
            Message::UpdateCartFailed => ("فشل تحديث السلة.", "Failed to update the cart."),
            Message::LoadCartFailed => ("فشل تحميل السلة.", "Failed to load the cart."),
            Message::CartEmpty => ("السلة فارغة.", "Your cart is empty."),

            Message::LoadOrdersFailed => ("فشل تحميل الطلبات.", "Failed to load orders."),
            Message::CheckoutFailed => ("فشل إتمام الطلب.", "Checkout failed."),
            Message::RedirectingToPayment => ("جاري التحويل إلى صفحة الدفع...", "Redirecting to payment..."),

            Message::PaymentSuccessTitle => ("تم الدفع بنجاح", "Payment successful"),
            Message::PaymentSuccessBody => (
                "شكراً لك! تم استلام طلبك وسيتم تجهيزه قريباً.",
                "Thank you! Your order was received and will be prepared shortly.",
            ),
            Message::PaymentFailedTitle => ("فشل الدفع", "Payment failed"),
            Message::PaymentFailedBody => (
                "لم تتم عملية الدفع. لم يتم خصم أي مبلغ.",
                "The payment did not go through. You were not charged.",
            ),
            Message::PaymentCancelledTitle => ("تم إلغاء الدفع", "Payment cancelled"),
            Message::PaymentCancelledBody => (
                "قمت بإلغاء عملية الدفع. سلتك ما زالت محفوظة.",
                "You cancelled the payment. Your cart is still saved.",
            ),
            Message::PaymentErrorTitle => ("خطأ في الدفع", "Payment error"),
            Message::PaymentErrorBody => (
                "حدث خطأ أثناء معالجة الدفع. حاول مرة أخرى.",
                "Something went wrong while processing the payment. Please try again.",
            ),
            Message::PaymentPartialTitle => ("دفع جزئي", "Partial payment"),
            Message::PaymentPartialBody => (
                "تم استلام جزء من المبلغ فقط. سيتواصل معك فريق الدعم.",
                "Only part of the amount was received. Our support team will contact you.",
            ),
            Message::PaymentAlreadyProcessedTitle => ("تمت معالجة الطلب مسبقاً", "Already processed"),
            Message::PaymentAlreadyProcessedBody => (
                "تمت معالجة هذا الدفع من قبل.",
                "This payment has already been processed.",
            ),
            Message::PaymentUnknownTitle => ("حالة غير معروفة", "Unknown status"),
            Message::PaymentUnknownBody => (
                "لم نتمكن من تحديد حالة الدفع. تحقق من طلباتك.",
                "We could not determine the payment status. Check your orders.",
            ),

            Message::LoadDashboardFailed => ("فشل تحميل لوحة التحكم.", "Failed to load the dashboard."),
            Message::SaveSuccess => ("تم الحفظ بنجاح.", "Saved successfully."),
            Message::SaveFailed => ("فشل الحفظ.", "Save failed."),
            Message::DeleteSuccess => ("تم الحذف بنجاح.", "Deleted successfully."),
            Message::DeleteFailed => ("فشل الحذف.", "Delete failed."),
            Message::PayoutMarkedPaid => ("تم تعليم الدفعة كمدفوعة.", "Payout marked as paid."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse_and_toggle() {
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::Ar.toggled(), Locale::En);
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_pick_falls_back_to_other_language() {
        assert_eq!(Locale::En.pick("ثلاجة", "Fridge"), "Fridge");
        assert_eq!(Locale::Ar.pick("ثلاجة", "Fridge"), "ثلاجة");
        assert_eq!(Locale::En.pick("ثلاجة", ""), "ثلاجة");
        assert_eq!(Locale::Ar.pick(" ", "Fridge"), "Fridge");
    }

    #[test]
    fn test_every_message_has_both_languages() {
        let keys = [
            Message::NetworkError,
            Message::CheckoutFailed,
            Message::PaymentSuccessTitle,
            Message::PaymentUnknownBody,
            Message::PayoutMarkedPaid,
        ];
        for key in keys {
            assert!(!key.text(Locale::Ar).is_empty());
            assert!(!key.text(Locale::En).is_empty());
            assert_ne!(key.text(Locale::Ar), key.text(Locale::En));
        }
    }
}
