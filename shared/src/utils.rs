//! # Shared Utility Functions
//!
//! Display helpers used by the client and any other consumer of the DTOs.
//!
//! ```rust
//! use shared::utils::{format_amount, truncate_text};
//!
//! assert_eq!(format_amount(1250.5, 3), "1,250.500");
//! assert_eq!(truncate_text("Samsung Galaxy S24 Ultra", 10), "Samsung Ga...");
//! ```

/// Format an amount with thousands separators and a fixed number of decimals.
///
/// Negative amounts keep their sign in front of the first digit.
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount(0.0, 2), "0.00");
/// assert_eq!(format_amount(-1234567.891, 2), "-1,234,567.89");
/// ```
pub fn format_amount(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Truncate text to `max_chars` characters, appending `...` when cut.
///
/// Counts characters, not bytes, so Arabic text is never split mid-codepoint.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250.5, 3), "1,250.500");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(1000.0, 0), "1,000");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("ثلاجة سامسونج", 5), "ثلاجة...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
