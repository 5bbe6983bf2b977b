use std::str::FromStr;

use rust_decimal::Decimal;

use crate::ShopifyApiError;

/// Shopify expresses prices as decimal strings in the shop currency ("10.00", "7.5", "12.250" for three-decimal
/// currencies). Converts one into an exact decimal, keeping every fractional digit that was sent.
pub fn parse_shopify_price(price: &str) -> Result<Decimal, ShopifyApiError> {
    let invalid =
        |reason: &str| ShopifyApiError::InvalidCurrencyAmount(format!("Invalid price value: {price}. {reason}."));
    let trimmed = price.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let mut parts = unsigned.split('.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();
    if parts.next().is_some() {
        return Err(invalid("More than one decimal point"));
    }
    let fraction_digits = fraction.unwrap_or_default();
    if whole.is_empty() && fraction_digits.is_empty() {
        return Err(invalid("No digits"));
    }
    if !whole.chars().chain(fraction_digits.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid("Not a number"));
    }
    let whole = if whole.is_empty() { "0" } else { whole };
    let canonical = match fraction {
        Some(f) if !f.is_empty() => format!("{sign}{whole}.{f}"),
        _ => format!("{sign}{whole}"),
    };
    Decimal::from_str(&canonical).map_err(|e| invalid(&e.to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_prices() {
        assert_eq!(parse_shopify_price("10.00").unwrap(), Decimal::new(1000, 2));
        assert_eq!(parse_shopify_price("10.5").unwrap(), Decimal::new(1050, 2));
        assert_eq!(parse_shopify_price("10.05").unwrap(), Decimal::new(1005, 2));
        assert_eq!(parse_shopify_price("7").unwrap(), Decimal::from(7));
        assert_eq!(parse_shopify_price("7.").unwrap(), Decimal::from(7));
        assert_eq!(parse_shopify_price(".99").unwrap(), Decimal::new(99, 2));
        assert_eq!(parse_shopify_price("-3.20").unwrap(), Decimal::new(-320, 2));
        assert_eq!(parse_shopify_price(" 0.00 ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn three_decimal_prices_are_exact() {
        assert_eq!(parse_shopify_price("10.000").unwrap(), Decimal::from(10));
        assert_eq!(parse_shopify_price("5.250").unwrap(), Decimal::new(525, 2));
        assert_eq!(parse_shopify_price("1.234").unwrap(), Decimal::new(1234, 3));
        assert_eq!(parse_shopify_price("1.234").unwrap().to_string(), "1.234");
    }

    #[test]
    fn reject_bad_prices() {
        for bad in ["", ".", "-", "abc", "1.2.3", "1,00", "--1", "1e3", "+-2"] {
            let err = parse_shopify_price(bad).unwrap_err();
            assert!(matches!(err, ShopifyApiError::InvalidCurrencyAmount(_)), "{bad} should be rejected");
        }
    }
}
