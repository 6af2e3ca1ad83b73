//! Money type for representing prices.
//!
//! The storefront sells in Uzbek so'm, which has no fractional unit in
//! practice: every price is a whole number. Amounts are stored as `i64`
//! and all aggregate arithmetic saturates instead of overflowing, so cart
//! totals stay total functions.

use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A whole-unit monetary amount in the store currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Add, returning `None` on overflow.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }

    /// Add, clamping at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_multiply(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Subtract, clamping at the numeric bounds.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Format the amount with digit grouping, without a currency suffix.
    ///
    /// Uzbek and Russian group with a space, English with a comma.
    pub fn display_amount(&self, locale: Locale) -> String {
        let separator = match locale {
            Locale::Uz | Locale::Ru => ' ',
            Locale::En => ',',
        };
        group_digits(self.0, separator)
    }

    /// Format as a localized price, e.g. `849 000 so'm` or `849,000 UZS`.
    pub fn display(&self, locale: Locale) -> String {
        format!("{} {}", self.display_amount(locale), locale.currency_suffix())
    }
}

fn group_digits(amount: i64, separator: char) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_amount() {
        let m = Money::new(849_000);
        assert_eq!(m.amount(), 849_000);
        assert!(m.is_positive());
        assert!(Money::zero().is_zero());
    }

    #[test]
    fn test_money_display_per_locale() {
        let m = Money::new(12_849_000);
        assert_eq!(m.display(Locale::Uz), "12 849 000 so'm");
        assert_eq!(m.display(Locale::Ru), "12 849 000 сум");
        assert_eq!(m.display(Locale::En), "12,849,000 UZS");
    }

    #[test]
    fn test_group_digits_edges() {
        assert_eq!(group_digits(0, ' '), "0");
        assert_eq!(group_digits(999, ' '), "999");
        assert_eq!(group_digits(1000, ' '), "1 000");
        assert_eq!(group_digits(-1_500_000, ','), "-1,500,000");
    }

    #[test]
    fn test_money_arithmetic_saturates() {
        let max = Money::new(i64::MAX);
        assert_eq!(max + Money::new(1), max);
        assert_eq!(max.saturating_multiply(2), max);
        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(Money::new(300).checked_multiply(3), Some(Money::new(900)));
    }

    #[test]
    fn test_money_sum() {
        let items = [Money::new(1000), Money::new(2500)];
        let total: Money = items.iter().sum();
        assert_eq!(total, Money::new(3500));
    }

    #[test]
    fn test_money_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Money::new(849000)).unwrap(), "849000");
        let back: Money = serde_json::from_str("849000").unwrap();
        assert_eq!(back, Money::new(849000));
    }
}
