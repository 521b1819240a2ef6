//! # Installment Pricing
//!
//! The single home of installment/resale arithmetic. Product listings,
//! product details and the cart all price through these functions so the
//! numbers shown on a product page and the cart totals cannot drift apart.
//!
//! A plan `{months, profit_percentage}` multiplies the base price by
//! `1 + profit_percentage / 100`; the result is spread evenly over `months`.
//! The amount is computed as `base + base * profit_percentage / 100`, which
//! keeps whole-number percentages of whole-number prices exact.
//!
//! ```rust
//! use shared::InstallmentPlan;
//! use storefront::domain::pricing;
//!
//! let plan = InstallmentPlan::new(3, 10.0);
//! assert_eq!(pricing::installment_price(100.0, Some(&plan)), 110.0);
//! assert_eq!(pricing::profit_amount(100.0, &plan), 10.0);
//! ```
//!
//! Stored amounts are raw `f64`; use [`round_currency`] only for display.

use shared::InstallmentPlan;

/// `price * quantity`
pub fn line_total(price: f64, quantity: u32) -> f64 {
    price * f64::from(quantity)
}

/// Unit price under a plan; the base price when no plan is selected.
pub fn installment_price(price: f64, plan: Option<&InstallmentPlan>) -> f64 {
    match plan {
        Some(plan) => price + profit_amount(price, plan),
        None => price,
    }
}

/// Profit the plan adds on top of `price`.
pub fn profit_amount(price: f64, plan: &InstallmentPlan) -> f64 {
    price * plan.profit_percentage / 100.0
}

/// Monthly instalment for one unit. A zero-month plan is paid at once.
pub fn monthly_payment(price: f64, plan: &InstallmentPlan) -> f64 {
    let total = installment_price(price, Some(plan));
    if plan.months == 0 {
        total
    } else {
        total / f64::from(plan.months)
    }
}

/// Plan with exactly `months`, if the product offers one.
pub fn select_plan(plans: &[InstallmentPlan], months: u32) -> Option<&InstallmentPlan> {
    plans.iter().find(|plan| plan.months == months)
}

/// Plan with the lowest profit percentage (ties: fewer months).
pub fn cheapest_plan(plans: &[InstallmentPlan]) -> Option<&InstallmentPlan> {
    plans.iter().min_by(|a, b| {
        a.profit_percentage
            .total_cmp(&b.profit_percentage)
            .then(a.months.cmp(&b.months))
    })
}

/// Full price breakdown for a quantity of a product under an optional plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote {
    /// `price * quantity`
    pub base_total: f64,
    /// Profit added by the plan (0 without plan)
    pub profit: f64,
    /// Amount the customer pays in total
    pub total: f64,
    /// Per-month amount (equals `total` without plan)
    pub monthly: f64,
    /// Plan duration (0 without plan)
    pub months: u32,
}

/// Price `quantity` units at `price` under `plan`.
pub fn quote(price: f64, quantity: u32, plan: Option<&InstallmentPlan>) -> PriceQuote {
    let base_total = line_total(price, quantity);
    match plan {
        Some(plan) => {
            let profit = profit_amount(base_total, plan);
            let total = base_total + profit;
            let monthly = if plan.months == 0 {
                total
            } else {
                total / f64::from(plan.months)
            };
            PriceQuote {
                base_total,
                profit,
                total,
                monthly,
                months: plan.months,
            }
        }
        None => PriceQuote {
            base_total,
            profit: 0.0,
            total: base_total,
            monthly: base_total,
            months: 0,
        },
    }
}

/// Round half away from zero to `decimals` places, for display.
pub fn round_currency(amount: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (amount * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_installment_price_without_plan_is_base() {
        assert_eq!(installment_price(100.0, None), 100.0);
    }

    #[test]
    fn test_quote_with_plan() {
        let plan = InstallmentPlan::new(3, 10.0);
        let q = quote(100.0, 2, Some(&plan));

        assert_eq!(q.base_total, 200.0);
        assert_eq!(q.total, 220.0);
        assert_eq!(q.profit, 20.0);
        assert!((q.monthly - 220.0 / 3.0).abs() < EPSILON);
        assert_eq!(q.months, 3);
    }

    #[test]
    fn test_quote_without_plan() {
        let q = quote(49.5, 4, None);
        assert_eq!(q.total, 198.0);
        assert_eq!(q.monthly, 198.0);
        assert_eq!(q.profit, 0.0);
        assert_eq!(q.months, 0);
    }

    #[test]
    fn test_quote_matches_unit_pricing() {
        let plan = InstallmentPlan::new(12, 18.5);
        let q = quote(333.33, 3, Some(&plan));
        let per_unit = installment_price(333.33, Some(&plan));
        assert!((q.total - per_unit * 3.0).abs() < 1e-6);
        assert!((monthly_payment(333.33, &plan) * 3.0 - q.monthly).abs() < 1e-6);
    }

    #[test]
    fn test_zero_month_plan_is_paid_at_once() {
        let plan = InstallmentPlan::new(0, 5.0);
        assert_eq!(monthly_payment(100.0, &plan), 105.0);
    }

    #[test]
    fn test_select_and_cheapest_plan() {
        let plans = vec![
            InstallmentPlan::new(12, 20.0),
            InstallmentPlan::new(3, 10.0),
            InstallmentPlan::new(6, 10.0),
        ];
        assert_eq!(select_plan(&plans, 6), Some(&plans[2]));
        assert_eq!(select_plan(&plans, 9), None);
        assert_eq!(cheapest_plan(&plans), Some(&plans[1]));
        assert_eq!(cheapest_plan(&[]), None);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(73.3333333, 2), 73.33);
        assert_eq!(round_currency(2.71828, 3), 2.718);
        assert_eq!(round_currency(-2.5, 0), -3.0);
    }
}
