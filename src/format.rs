//! Price display formatting.

/// Format a price for display with a currency symbol.
///
/// Common storefront currencies get their symbol; anything else renders
/// as `"<amount> <code>"`. Two decimal places always — prices come from
/// the loader as floats and the page must not show `R$ 129.9000000001`.
pub fn format_price(price: f64, currency: &str) -> String {
    match currency {
        "BRL" => format!("R$ {price:.2}"),
        "USD" => format!("${price:.2}"),
        "EUR" => format!("\u{20ac}{price:.2}"),
        "GBP" => format!("\u{a3}{price:.2}"),
        _ => format!("{price:.2} {currency}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_currencies_get_symbols() {
        assert_eq!(format_price(129.9, "BRL"), "R$ 129.90");
        assert_eq!(format_price(99.99, "USD"), "$99.99");
        assert_eq!(format_price(10.0, "EUR"), "\u{20ac}10.00");
        assert_eq!(format_price(10.0, "GBP"), "\u{a3}10.00");
    }

    #[test]
    fn unknown_currency_trails_the_code() {
        assert_eq!(format_price(42.5, "SEK"), "42.50 SEK");
    }

    #[test]
    fn always_two_decimal_places() {
        assert_eq!(format_price(100.0, "BRL"), "R$ 100.00");
        assert_eq!(format_price(0.1 + 0.2, "USD"), "$0.30");
    }
}
