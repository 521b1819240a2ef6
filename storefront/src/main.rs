//! # Storefront Client
//!
//! Headless entry point: restores the stored session, loads the catalog and,
//! when given the payment gateway's return URL as the first argument, shows
//! the payment result.
//!
//! ```text
//! storefront "https://shop.example/payment/result?status=success&order_id=42"
//! ```

use std::time::Duration;

use shared::utils::{format_amount, truncate_text};
use storefront::domain::payment::Tone;
use storefront::domain::pricing::round_currency;
use storefront::i18n::Locale;
use storefront::{logging, App, Result, StorefrontConfig};

const IDLE_TIMEOUT: Duration = Duration::from_secs(3);
const AMOUNT_DECIMALS: u32 = 3;

fn money(amount: f64) -> String {
    format_amount(round_currency(amount, AMOUNT_DECIMALS), AMOUNT_DECIMALS as usize)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = StorefrontConfig::from_env()?;
    config.validate()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init(&config);

    let mut app = App::new(&config)?;
    let restored = app.restore_session();
    app.load_catalog();

    if let Some(query) = std::env::args().nth(1) {
        let result = app.handle_payment_return(&query);
        let locale = app.state.read().locale;
        println!("{}", result.title(locale));
        println!("{}", result.body(locale));
        if let Some(reference) = result.order_reference() {
            println!("#{}", reference);
        }
    }

    let processed = app.process_events_until_idle(IDLE_TIMEOUT).await;

    for toast in app.take_notifications() {
        match toast.tone {
            Tone::Error | Tone::Warning => tracing::warn!(tone = ?toast.tone, "{}", toast.message),
            Tone::Success | Tone::Info => tracing::info!(tone = ?toast.tone, "{}", toast.message),
        }
    }

    let state = app.state.read();
    for product in &state.catalog.products {
        let name = match state.locale {
            Locale::En if !product.name_en.is_empty() => &product.name_en,
            _ => &product.name_ar,
        };
        let monthly = state
            .catalog
            .starting_monthly(product.id)
            .map(|(amount, months)| format!("{} x{}", money(amount), months))
            .unwrap_or_default();
        println!("{:<40} {:>14} {:>20}", truncate_text(name, 40), money(product.price), monthly);
    }

    for item in state.cart.items() {
        println!(
            "{:<40} x{:<3} {:>14}",
            truncate_text(item.display_name(state.locale), 40),
            item.quantity,
            money(item.installment_line_total())
        );
    }
    if !state.cart.is_empty() {
        println!(
            "{:<45} {:>14}",
            "",
            money(state.cart.installment_total())
        );
    }

    tracing::info!(
        restored,
        processed,
        authenticated = state.is_authenticated(),
        user = ?state.current_user.as_ref().map(|user| user.email.as_str()),
        products = state.catalog.products.len(),
        product_types = state.catalog.product_types.len(),
        cart_items = state.cart.item_count(),
        cart_total = state.cart.total(),
        "Storefront session summary"
    );

    Ok(())
}
