//! The currency codec: display formatting and its exact inverse.
//!
//! Every price shown anywhere in Certifurb goes through [`Price::format`],
//! and every place that needs the numeric value back (the category browser's
//! price filter) goes through [`Price::parse`]. The two are a matched pair:
//! `Price::parse(&p.format())` always returns `p`. Nothing else in the
//! codebase is allowed to format or strip currency strings.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The display currency prefix.
const CURRENCY_PREFIX: &str = "PKR ";

/// Errors that can occur when parsing a [`Price`] from its display form.
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceParseError {
    /// The input contains no digits at all.
    #[error("price string contains no digits")]
    NoDigits,
    /// The numeric remainder is not a valid decimal number.
    #[error("invalid price number: {0}")]
    InvalidNumber(#[from] rust_decimal::Error),
}

/// A product price.
///
/// Wraps a [`Decimal`] amount in PKR. Comparison and arithmetic happen on
/// the decimal; display happens through [`Price::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The numeric amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display: `PKR` prefix, thousands-grouped integer part,
    /// fractional part only when non-zero (`PKR 130,000`, `PKR 1,234.5`).
    #[must_use]
    pub fn format(&self) -> String {
        let raw = self.0.to_string();
        let unsigned = raw.strip_prefix('-').unwrap_or(&raw);
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let grouped = group_thousands(int_part);

        match frac_part {
            Some(f) if !f.chars().all(|c| c == '0') => {
                format!("{CURRENCY_PREFIX}{grouped}.{f}")
            }
            _ => format!("{CURRENCY_PREFIX}{grouped}"),
        }
    }

    /// Parse a display string back into a price.
    ///
    /// Strips everything except digits and the decimal point, then parses
    /// the remainder. This inverts [`Price::format`] exactly, and also
    /// accepts bare numbers (`"10000"`).
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains no digits or the numeric
    /// remainder is not a valid decimal.
    pub fn parse(s: &str) -> Result<Self, PriceParseError> {
        let numeric: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

        if !numeric.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceParseError::NoDigits);
        }

        let amount = numeric.parse::<Decimal>()?;
        Ok(Self(amount))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Insert thousands separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(Price::new(dec("130000")).format(), "PKR 130,000");
        assert_eq!(Price::new(dec("500")).format(), "PKR 500");
        assert_eq!(Price::new(dec("500000")).format(), "PKR 500,000");
        assert_eq!(Price::new(dec("1234567")).format(), "PKR 1,234,567");
    }

    #[test]
    fn test_format_keeps_nonzero_fraction() {
        assert_eq!(Price::new(dec("1234.5")).format(), "PKR 1,234.5");
        assert_eq!(Price::new(dec("99.99")).format(), "PKR 99.99");
    }

    #[test]
    fn test_format_drops_zero_fraction() {
        assert_eq!(Price::new(dec("1234.00")).format(), "PKR 1,234");
    }

    #[test]
    fn test_parse_display_strings() {
        assert_eq!(Price::parse("PKR 10,000").unwrap().amount(), dec("10000"));
        assert_eq!(
            Price::parse("PKR 600,000").unwrap().amount(),
            dec("600000")
        );
        assert_eq!(Price::parse("PKR 99.99").unwrap().amount(), dec("99.99"));
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(Price::parse("10000").unwrap().amount(), dec("10000"));
    }

    #[test]
    fn test_parse_no_digits() {
        assert!(matches!(
            Price::parse("PKR "),
            Err(PriceParseError::NoDigits)
        ));
        assert!(matches!(Price::parse(""), Err(PriceParseError::NoDigits)));
    }

    #[test]
    fn test_roundtrip() {
        // format then parse must return the original value for every
        // valid price, across magnitudes and fractional parts
        for amount in [
            "0", "1", "99", "100", "500", "999", "1000", "10000", "130000",
            "500000", "600000", "1234567", "1234.5", "99.99", "0.5",
        ] {
            let price = Price::new(dec(amount));
            let reparsed = Price::parse(&price.format()).unwrap();
            assert_eq!(reparsed, price, "round-trip failed for {amount}");
        }
    }
}
