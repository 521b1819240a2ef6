//! Validation utilities for form input
//!
//! Every validator returns the first problem found, in the active locale.

use shared::{DiscountCode, InstallmentPlan, ProductPayload, RegisterRequest};

use crate::core::error::{AppError, Result};
use crate::i18n::Locale;

/// Image extensions accepted by the upload endpoints
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    fn localized(locale: Locale, ar: &str, en: &str) -> Self {
        Self::err(locale.pick(ar, en))
    }

    /// Convert into a `Result`, for `?` chaining in handlers.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate a required text field
pub fn validate_required(value: &str, field_ar: &str, field_en: &str, locale: Locale) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(match locale {
            Locale::Ar => format!("{} مطلوب", field_ar),
            Locale::En => format!("{} is required", field_en),
        });
    }
    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str, locale: Locale) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::localized(locale, "البريد الإلكتروني مطلوب", "Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return ValidationResult::localized(locale, "البريد الإلكتروني غير صالح", "Invalid email format");
    }

    let domain = parts[1];
    if domain.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return ValidationResult::localized(locale, "نطاق البريد الإلكتروني غير صالح", "Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str, locale: Locale) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::localized(locale, "كلمة المرور مطلوبة", "Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::localized(
            locale,
            "كلمة المرور يجب أن تكون 8 أحرف على الأقل",
            "Password must be at least 8 characters",
        );
    }

    ValidationResult::ok()
}

/// Validate the login form
pub fn validate_login(email: &str, password: &str, locale: Locale) -> ValidationResult {
    let email_check = validate_email(email, locale);
    if !email_check.is_valid {
        return email_check;
    }
    if password.is_empty() {
        return ValidationResult::localized(locale, "كلمة المرور مطلوبة", "Password is required");
    }
    ValidationResult::ok()
}

/// Validate the registration form
pub fn validate_registration(request: &RegisterRequest, locale: Locale) -> ValidationResult {
    let checks = [
        validate_required(&request.name, "الاسم", "Name", locale),
        validate_email(&request.email, locale),
        validate_password(&request.password, locale),
    ];
    if let Some(failed) = checks.into_iter().find(|check| !check.is_valid) {
        return failed;
    }

    if request.password != request.password_confirmation {
        return ValidationResult::localized(locale, "كلمتا المرور غير متطابقتين", "Passwords don't match");
    }

    ValidationResult::ok()
}

/// Validate an installment tier
pub fn validate_installment_plan(plan: &InstallmentPlan, locale: Locale) -> ValidationResult {
    if plan.months == 0 {
        return ValidationResult::localized(
            locale,
            "عدد الأشهر يجب أن يكون 1 على الأقل",
            "Installment months must be at least 1",
        );
    }

    if !plan.profit_percentage.is_finite() || !(0.0..=100.0).contains(&plan.profit_percentage) {
        return ValidationResult::localized(
            locale,
            "نسبة الربح يجب أن تكون بين 0 و 100",
            "Profit percentage must be between 0 and 100",
        );
    }

    ValidationResult::ok()
}

/// Validate the admin product form
pub fn validate_product(payload: &ProductPayload, locale: Locale) -> ValidationResult {
    let name_check = validate_required(&payload.name_ar, "اسم المنتج بالعربية", "Arabic product name", locale);
    if !name_check.is_valid {
        return name_check;
    }

    if !payload.price.is_finite() || payload.price <= 0.0 {
        return ValidationResult::localized(locale, "السعر يجب أن يكون أكبر من صفر", "Price must be positive");
    }

    if let Some(old_price) = payload.old_price {
        if !old_price.is_finite() || old_price < 0.0 {
            return ValidationResult::localized(locale, "السعر القديم غير صالح", "Old price is invalid");
        }
    }

    for plan in &payload.installment_plans {
        let plan_check = validate_installment_plan(plan, locale);
        if !plan_check.is_valid {
            return plan_check;
        }
    }

    let mut months: Vec<u32> = payload.installment_plans.iter().map(|p| p.months).collect();
    months.sort_unstable();
    months.dedup();
    if months.len() != payload.installment_plans.len() {
        return ValidationResult::localized(
            locale,
            "لا يمكن تكرار نفس مدة التقسيط",
            "Each installment duration can only be listed once",
        );
    }

    ValidationResult::ok()
}

/// Validate an image before upload (size and extension)
pub fn validate_image_upload(file_name: &str, size_bytes: u64, max_bytes: u64, locale: Locale) -> ValidationResult {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return ValidationResult::localized(
            locale,
            "نوع الصورة غير مدعوم (jpg, jpeg, png, webp, gif)",
            "Unsupported image type (jpg, jpeg, png, webp, gif)",
        );
    }

    if size_bytes == 0 {
        return ValidationResult::localized(locale, "الملف فارغ", "File is empty");
    }

    if size_bytes > max_bytes {
        let max_mb = max_bytes as f64 / (1024.0 * 1024.0);
        return ValidationResult::err(match locale {
            Locale::Ar => format!("حجم الصورة يجب ألا يتجاوز {:.0} ميجابايت", max_mb),
            Locale::En => format!("Image must be at most {:.0} MB", max_mb),
        });
    }

    ValidationResult::ok()
}

/// Validate a discount code form
pub fn validate_discount_code(code: &DiscountCode, locale: Locale) -> ValidationResult {
    let trimmed = code.code.trim();
    if trimmed.is_empty() {
        return ValidationResult::localized(locale, "كود الخصم مطلوب", "Discount code is required");
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return ValidationResult::localized(
            locale,
            "كود الخصم يقبل الأحرف الإنجليزية والأرقام فقط",
            "Discount code can only contain letters, numbers, _ and -",
        );
    }

    if !code.percentage.is_finite() || code.percentage <= 0.0 || code.percentage > 100.0 {
        return ValidationResult::localized(
            locale,
            "نسبة الخصم يجب أن تكون بين 0 و 100",
            "Discount percentage must be between 0 and 100",
        );
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirmation: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            phone: None,
            password: password.to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    fn product(price: f64, plans: Vec<InstallmentPlan>) -> ProductPayload {
        ProductPayload {
            name_ar: "ثلاجة".to_string(),
            name_en: "Fridge".to_string(),
            price,
            stock: 3,
            installment_plans: plans,
            ..ProductPayload::default()
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com", Locale::En).is_valid);
        assert!(validate_email("user@domain.com.kw", Locale::En).is_valid);
        assert!(!validate_email("", Locale::En).is_valid);
        assert!(!validate_email("invalid", Locale::En).is_valid);
        assert!(!validate_email("@example.com", Locale::En).is_valid);
        assert!(!validate_email("test@", Locale::En).is_valid);
        assert!(!validate_email("test@example.", Locale::En).is_valid);
    }

    #[test]
    fn test_messages_follow_locale() {
        assert_eq!(validate_email("", Locale::En).error.as_deref(), Some("Email is required"));
        assert_eq!(
            validate_email("", Locale::Ar).error.as_deref(),
            Some("البريد الإلكتروني مطلوب")
        );
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("secret123", Locale::En).is_valid);
        assert!(!validate_password("short", Locale::En).is_valid);
        assert!(!validate_password("", Locale::En).is_valid);
    }

    #[test]
    fn test_registration_validation() {
        assert!(validate_registration(&registration("password1", "password1"), Locale::En).is_valid);

        let mismatch = validate_registration(&registration("password1", "password2"), Locale::En);
        assert_eq!(mismatch.error.as_deref(), Some("Passwords don't match"));

        let mut missing_name = registration("password1", "password1");
        missing_name.name = "  ".to_string();
        assert_eq!(
            validate_registration(&missing_name, Locale::En).error.as_deref(),
            Some("Name is required")
        );
    }

    #[test]
    fn test_product_validation() {
        assert!(validate_product(&product(250.0, vec![InstallmentPlan::new(3, 10.0)]), Locale::En).is_valid);
        assert!(!validate_product(&product(0.0, vec![]), Locale::En).is_valid);
        assert!(!validate_product(&product(-5.0, vec![]), Locale::En).is_valid);
        assert!(!validate_product(&product(10.0, vec![InstallmentPlan::new(0, 10.0)]), Locale::En).is_valid);
        assert!(!validate_product(&product(10.0, vec![InstallmentPlan::new(6, 120.0)]), Locale::En).is_valid);
        assert!(!validate_product(&product(10.0, vec![InstallmentPlan::new(6, -1.0)]), Locale::En).is_valid);
        assert!(!validate_product(
            &product(10.0, vec![InstallmentPlan::new(6, 5.0), InstallmentPlan::new(6, 8.0)]),
            Locale::En
        )
        .is_valid);
    }

    #[test]
    fn test_image_upload_validation() {
        let max = 2 * 1024 * 1024;
        assert!(validate_image_upload("front.JPG", 1024, max, Locale::En).is_valid);
        assert!(validate_image_upload("side.webp", max, max, Locale::En).is_valid);
        assert!(!validate_image_upload("manual.pdf", 1024, max, Locale::En).is_valid);
        assert!(!validate_image_upload("noextension", 1024, max, Locale::En).is_valid);
        assert!(!validate_image_upload("empty.png", 0, max, Locale::En).is_valid);

        let too_big = validate_image_upload("huge.png", max + 1, max, Locale::En);
        assert_eq!(too_big.error.as_deref(), Some("Image must be at most 2 MB"));
    }

    #[test]
    fn test_discount_code_validation() {
        let mut code: DiscountCode = serde_json::from_value(serde_json::json!({
            "code": "EID-2025",
            "percentage": 15.0
        }))
        .unwrap();
        assert!(validate_discount_code(&code, Locale::En).is_valid);

        code.percentage = 0.0;
        assert!(!validate_discount_code(&code, Locale::En).is_valid);

        code.percentage = 10.0;
        code.code = "عيد".to_string();
        assert!(!validate_discount_code(&code, Locale::En).is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        assert_eq!(
            ValidationResult::err("Price must be positive").into_result(),
            Err(AppError::Validation("Price must be positive".to_string()))
        );
    }
}
