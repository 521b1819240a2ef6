//! # Cart
//!
//! In-memory cart with derived totals. Every mutation recomputes both
//! totals synchronously, so readers never observe stale numbers:
//!
//! - `total` = Σ `price * quantity`
//! - `installment_total` = Σ per line: `price * quantity`, raised by the
//!   selected plan's profit percentage when the line has one
//!
//! The cart is not persisted; after a restart it is re-synced from the
//! backend with [`Cart::replace_items`].

use serde::{Deserialize, Serialize};
use shared::{CartItemDto, InstallmentPlan, Product};

use super::pricing;
use crate::i18n::Locale;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub name_ar: String,
    pub name_en: String,
    pub image: Option<String>,
    pub price: f64,
    pub quantity: u32,
    /// Plans the product offers
    pub installment_plans: Vec<InstallmentPlan>,
    /// Plan chosen by the customer (cash purchase when `None`)
    pub selected_installment: Option<InstallmentPlan>,
}

impl CartItem {
    /// Cart line for `quantity` units of `product`.
    pub fn from_product(product: &Product, quantity: u32, plan: Option<InstallmentPlan>) -> Self {
        Self {
            product_id: product.id,
            name_ar: product.name_ar.clone(),
            name_en: product.name_en.clone(),
            image: product.main_image.clone(),
            price: product.price,
            quantity,
            installment_plans: product.installment_plans.clone(),
            selected_installment: plan,
        }
    }

    pub fn display_name(&self, locale: Locale) -> &str {
        locale.pick(&self.name_ar, &self.name_en)
    }

    /// `price * quantity`
    pub fn line_total(&self) -> f64 {
        pricing::line_total(self.price, self.quantity)
    }

    /// Line total under the selected plan.
    pub fn installment_line_total(&self) -> f64 {
        pricing::quote(self.price, self.quantity, self.selected_installment.as_ref()).total
    }
}

impl From<CartItemDto> for CartItem {
    fn from(dto: CartItemDto) -> Self {
        Self {
            product_id: dto.product_id,
            name_ar: dto.name_ar,
            name_en: dto.name_en,
            image: dto.image,
            price: dto.price,
            quantity: dto.quantity,
            installment_plans: dto.installment_plans,
            selected_installment: dto.selected_installment,
        }
    }
}

/// Cart contents plus derived totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total: f64,
    installment_total: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, product_id: i64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.item(product_id).is_some()
    }

    /// Σ `price * quantity`
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Σ installment line totals (equals `total` when no line has a plan)
    pub fn installment_total(&self) -> f64 {
        self.installment_total
    }

    /// Total number of units (cart badge).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any line is bought on installments.
    pub fn has_installments(&self) -> bool {
        self.items.iter().any(|item| item.selected_installment.is_some())
    }

    /// Add a line. A product already in the cart gets its quantity increased
    /// instead of a second entry; its plan is replaced only when the incoming
    /// line carries one.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }

        match self.items.iter_mut().find(|existing| existing.product_id == item.product_id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                if item.selected_installment.is_some() {
                    existing.selected_installment = item.selected_installment;
                }
            }
            None => self.items.push(item),
        }
        self.calculate_totals();
    }

    /// Remove a product's line. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        let removed = self.items.len() != before;
        self.calculate_totals();
        removed
    }

    /// Set a line's quantity. Zero or below removes the line.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.quantity = quantity;
        }
        self.calculate_totals();
    }

    /// Select (or clear with `None`) the installment plan of a line.
    pub fn set_installment(&mut self, product_id: i64, plan: Option<InstallmentPlan>) {
        if let Some(item) = self.items.iter_mut().find(|item| item.product_id == product_id) {
            item.selected_installment = plan;
        }
        self.calculate_totals();
    }

    /// Replace the contents with the backend's authoritative snapshot.
    pub fn replace_items(&mut self, items: Vec<CartItem>) {
        self.items.clear();
        for item in items {
            // Server snapshots may repeat a product; merge like add_item does
            self.add_item(item);
        }
        self.calculate_totals();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.calculate_totals();
    }

    fn calculate_totals(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
        self.installment_total = self.items.iter().map(CartItem::installment_line_total).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id,
            name_ar: format!("منتج {}", product_id),
            name_en: format!("Product {}", product_id),
            image: None,
            price,
            quantity,
            installment_plans: vec![InstallmentPlan::new(3, 10.0), InstallmentPlan::new(6, 15.0)],
            selected_installment: None,
        }
    }

    fn expected_total(cart: &Cart) -> f64 {
        cart.items().iter().map(|i| i.price * f64::from(i.quantity)).sum()
    }

    #[test]
    fn test_single_item_totals() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 100.0, 2));

        assert_eq!(cart.total(), 200.0);
        assert_eq!(cart.installment_total(), 200.0);

        cart.set_installment(1, Some(InstallmentPlan::new(3, 10.0)));
        assert_eq!(cart.total(), 200.0);
        assert_eq!(cart.installment_total(), 220.0);
    }

    #[test]
    fn test_adding_existing_product_increments_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 50.0, 1));
        cart.add_item(item(1, 50.0, 2));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item(1).map(|i| i.quantity), Some(3));
        assert_eq!(cart.total(), 150.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_adding_existing_product_keeps_plan_unless_new_one_given() {
        let mut cart = Cart::new();
        let mut first = item(1, 100.0, 1);
        first.selected_installment = Some(InstallmentPlan::new(6, 15.0));
        cart.add_item(first);

        cart.add_item(item(1, 100.0, 1));
        assert_eq!(cart.item(1).unwrap().selected_installment, Some(InstallmentPlan::new(6, 15.0)));

        let mut third = item(1, 100.0, 1);
        third.selected_installment = Some(InstallmentPlan::new(3, 10.0));
        cart.add_item(third);
        assert_eq!(cart.item(1).unwrap().selected_installment, Some(InstallmentPlan::new(3, 10.0)));
        assert_eq!(cart.installment_total(), 330.0);
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10.0, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10.0, 1));
        cart.add_item(item(2, 20.0, 1));

        cart.update_quantity(1, 0);
        assert!(!cart.contains(1));
        assert_eq!(cart.total(), 20.0);

        cart.update_quantity(2, -3);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.installment_total(), 0.0);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 12.5, 1));
        cart.update_quantity(1, 4);
        assert_eq!(cart.total(), 50.0);

        // Unknown product: nothing changes
        cart.update_quantity(99, 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 10.0, 1));
        assert!(cart.remove_item(1));
        assert!(!cart.remove_item(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_totals_hold_across_mutation_sequence() {
        let mut cart = Cart::new();
        cart.add_item(item(1, 19.99, 3));
        cart.add_item(item(2, 5.25, 1));
        cart.add_item(item(3, 120.0, 2));
        cart.update_quantity(2, 7);
        cart.add_item(item(1, 19.99, 1));
        cart.remove_item(3);

        assert_eq!(cart.total(), expected_total(&cart));
        assert!(!cart.has_installments());
        assert_eq!(cart.installment_total(), cart.total());

        cart.set_installment(2, Some(InstallmentPlan::new(6, 15.0)));
        assert!(cart.has_installments());
        assert_eq!(cart.total(), expected_total(&cart));
        assert!(cart.installment_total() > cart.total());

        cart.set_installment(2, None);
        assert_eq!(cart.installment_total(), cart.total());
    }

    #[test]
    fn test_replace_items_and_clear() {
        let mut cart = Cart::new();
        cart.add_item(item(9, 1.0, 1));

        cart.replace_items(vec![item(1, 10.0, 1), item(2, 5.0, 2), item(1, 10.0, 1)]);
        assert_eq!(cart.items().len(), 2);
        assert!(!cart.contains(9));
        assert_eq!(cart.total(), 30.0);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }

    #[test]
    fn test_from_dto() {
        let dto: CartItemDto = serde_json::from_str(
            r#"{"product_id": 5, "name_ar": "غسالة", "price": 300, "quantity": 1,
                "selected_installment": {"months": 6, "profit_percentage": 12}}"#,
        )
        .unwrap();
        let item = CartItem::from(dto);
        assert_eq!(item.display_name(Locale::En), "غسالة");
        assert_eq!(item.installment_line_total(), 336.0);
    }
}
