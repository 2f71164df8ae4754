//! Price formatting for storefront display

/// Formats a price with exactly two fractional digits behind the currency symbol
///
/// ```
/// use frontend::shared::format::format_price;
/// assert_eq!(format_price(1234.5, "$"), "$1234.50");
/// ```
pub fn format_price(value: f64, symbol: &str) -> String {
    // `{:.2}` alone would send exact ties like 4.125 to the even cent
    let cents = (value * 100.0).round() / 100.0;
    format!("{}{:.2}", symbol, cents)
}

/// Cart line caption, e.g. "2 × $10.00"
pub fn format_line(quantity: u32, price: f64, symbol: &str) -> String {
    format!("{} × {}", quantity, format_price(price, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0, "$"), "$0.00");
        assert_eq!(format_price(14.5, "$"), "$14.50");
        assert_eq!(format_price(129.99, "€"), "€129.99");
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(10.005 * 2.0, "$"), "$20.01");
        assert_eq!(format_price(0.126, "$"), "$0.13");
    }

    #[test]
    fn test_format_price_rounds_ties_up() {
        assert_eq!(format_price(4.125, "$"), "$4.13");
        assert_eq!(format_price(0.125, "$"), "$0.13");
        assert_eq!(format_price(1.125, "$"), "$1.13");
        assert_eq!(format_line(1, 1.125, "$"), "1 × $1.13");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(2, 10.0, "$"), "2 × $10.00");
    }
}
