//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are rupee amounts. They are stored as a bare decimal so persisted
//! records stay compatible with order history written as plain JSON numbers.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Symbol prefixed to every displayed price.
pub const CURRENCY_SYMBOL: &str = "₹";

/// A price in the storefront currency.
///
/// Serializes as a decimal string; deserializes from a string or a JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in paise (hundredths of a rupee).
    #[must_use]
    pub fn from_paise(paise: i64) -> Self {
        Self(Decimal::new(paise, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a price the way the upload form hands it over.
    ///
    /// Accepts a full decimal, otherwise the longest leading numeric prefix
    /// (`"12.5kg"` is 12.5), otherwise zero. Negative amounts are kept as
    /// given.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(amount) = Decimal::from_str(trimmed) {
            return Self(amount);
        }
        Decimal::from_str(numeric_prefix(trimmed)).map_or(Self::ZERO, Self)
    }

    /// The amount with exactly two decimal places, without a symbol.
    #[must_use]
    pub fn amount_string(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 { "" } else { s.get(..end).unwrap_or("") }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.amount_string())
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Saturating addition.
///
/// Uploaded prices are taken as given, so a cart can hold amounts whose sum
/// exceeds what a `Decimal` represents. Totals clamp at the bounds instead.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_places_with_symbol() {
        assert_eq!(Price::from_paise(249_900).to_string(), "₹2499.00");
        assert_eq!(Price::new(Decimal::new(15, 1)).to_string(), "₹1.50");
    }

    #[test]
    fn test_sum_of_prices() {
        let prices = [Price::from_paise(249_900), Price::from_paise(399_900)];
        let total: Price = prices.iter().sum();
        assert_eq!(total, Price::from_paise(649_800));
        assert_eq!(total.amount_string(), "6498.00");
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Price = core::iter::empty::<Price>().sum();
        assert_eq!(total, Price::ZERO);
        assert_eq!(total.to_string(), "₹0.00");
    }

    #[test]
    fn test_sum_saturates_at_bounds() {
        let max = Price::new(Decimal::MAX);
        let total: Price = [max, max, Price::from_paise(100)].iter().sum();
        assert_eq!(total, max);

        let min = Price::new(Decimal::MIN);
        assert_eq!(min + min, min);
        assert_eq!(max + min, Price::ZERO);
    }

    #[test]
    fn test_parse_lenient_plain() {
        assert_eq!(Price::parse_lenient("2499.00"), Price::from_paise(249_900));
        assert_eq!(Price::parse_lenient(" 15 "), Price::from_paise(1_500));
    }

    #[test]
    fn test_parse_lenient_keeps_negative() {
        assert_eq!(Price::parse_lenient("-5"), Price::from_paise(-500));
    }

    #[test]
    fn test_parse_lenient_numeric_prefix() {
        assert_eq!(Price::parse_lenient("12.5kg"), Price::from_paise(1_250));
        assert_eq!(Price::parse_lenient("7."), Price::from_paise(700));
    }

    #[test]
    fn test_parse_lenient_garbage_is_zero() {
        assert_eq!(Price::parse_lenient("free"), Price::ZERO);
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("-"), Price::ZERO);
    }

    #[test]
    fn test_serializes_as_string_reads_numbers() {
        let price = Price::from_paise(249_900);
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"2499.00\"");
        let from_number: Price = serde_json::from_str("2499").unwrap();
        assert_eq!(from_number, price);
    }
}
