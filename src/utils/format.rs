//! Formatting helpers for the product table

use crate::domain::product::Product;

/// Format a price with two decimals and thousand separators
///
/// `NaN` and infinities render as `"n/a"`. Finite values beyond the `i64`
/// cent range are clamped to it.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    // u64::MAX / 100 fits in i64
    format!("{sign}{}.{:02}", format_number((cents / 100) as i64), cents % 100)
}

/// Truncate a string to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && chars[i - 1] != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// One fixed-width table row
pub fn product_row(product: &Product) -> String {
    format!(
        "{:<8} {:<20} {:<12} {:>10} {:>5} {}",
        product.code,
        truncate(&product.name, 20),
        truncate(&product.category, 12),
        format_price(product.effective_price()),
        product.quantity,
        product.status_label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(-0.25), "-0.25");
    }

    #[test]
    fn non_finite_and_huge_prices() {
        assert_eq!(format_price(f64::NAN), "n/a");
        assert_eq!(format_price(f64::INFINITY), "n/a");
        assert_eq!(format_price(f64::NEG_INFINITY), "n/a");
        assert_eq!(format_price(1e300), "92,233,720,368,547,758.07");
        assert_eq!(format_price(-1e300), "-92,233,720,368,547,758.08");
    }

    #[test]
    fn numbers_get_separators() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(-1234567), "-1,234,567");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Widget", 10), "Widget");
        assert_eq!(truncate("Screwdriver set", 8), "Screw...");
        assert_eq!(truncate("Ñandú", 2), "Ña");
    }

    #[test]
    fn row_uses_effective_price() {
        let product = Product::new("A1", "Widget", "Tools", 10.0, true).with_final_price(8.0);
        let row = product_row(&product);
        assert!(row.starts_with("A1"));
        assert!(row.contains("8.00"));
        assert!(row.ends_with("Active"));
    }
}
