//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
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

    /// A whole-unit USD price, e.g. `Price::usd(1899)` is `$1,899`.
    #[must_use]
    pub fn usd(whole: i64) -> Self {
        Self::new(Decimal::from(whole), CurrencyCode::USD)
    }

    /// Always render two decimal places, e.g. `$1,899.00`.
    #[must_use]
    pub fn format_currency(&self) -> String {
        let fixed = format!("{:.2}", self.amount.abs().round_dp(2));
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!(
            "{}{}{}.{cents}",
            self.sign(),
            self.currency_code.symbol(),
            group_thousands(whole)
        )
    }

    fn sign(&self) -> &'static str {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        }
    }
}

/// Whole amounts drop the cents (`$799`); fractional amounts keep two places.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.amount.round_dp(2);
        if rounded.fract().is_zero() {
            let whole = rounded.abs().trunc().to_string();
            write!(
                f,
                "{}{}{}",
                self.sign(),
                self.currency_code.symbol(),
                group_thousands(&whole)
            )
        } else {
            f.write_str(&self.format_currency())
        }
    }
}

/// Insert `,` every three digits from the right.
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

/// ISO 4217 currency codes. The catalog is priced in US dollars only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_amounts() {
        assert_eq!(Price::usd(799).to_string(), "$799");
        assert_eq!(Price::usd(1899).to_string(), "$1,899");
        assert_eq!(Price::usd(1_250_000).to_string(), "$1,250,000");
        assert_eq!(Price::usd(0).to_string(), "$0");
    }

    #[test]
    fn test_display_fractional_amount() {
        let price = Price::new(Decimal::new(189_950, 2), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$1,899.50");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(Price::usd(1899).format_currency(), "$1,899.00");
        let price = Price::new(Decimal::new(-1050, 2), CurrencyCode::USD);
        assert_eq!(price.format_currency(), "-$10.50");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
