//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are stored in the currency's standard unit (dirhams, not fils)
//! and rendered the way the storefront labels prices: en-US digit grouping
//! followed by the currency code, e.g. `1,620 AED`.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the storefront's default currency.
    #[must_use]
    pub fn from_amount(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::default())
    }

    /// Format the amount with en-US thousands separators.
    ///
    /// Whole amounts render without decimals; fractional amounts keep up
    /// to two digits with trailing zeros removed (`1620.50` → `1,620.5`).
    #[must_use]
    pub fn grouped_amount(&self) -> String {
        let rounded = self.amount.round_dp(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&group_thousands(whole));

        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grouped_amount(), self.currency_code.code())
    }
}

/// Insert a comma between every group of three digits, counting from the right.
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

/// ISO 4217 currency codes offered in the region selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    AED,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// All supported currencies, in selector order.
    pub const ALL: [Self; 4] = [Self::AED, Self::USD, Self::EUR, Self::GBP];

    /// The three-letter currency code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AED => "AED",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }

    /// The shipping region this currency is sold in.
    #[must_use]
    pub const fn region(&self) -> &'static str {
        match self {
            Self::AED => "UAE",
            Self::USD => "USA",
            Self::EUR => "EU",
            Self::GBP => "UK",
        }
    }
}
