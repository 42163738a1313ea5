//! # Receipt Configuration
//!
//! How money is written on a receipt.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BASKET_*`)
//! 2. Defaults (this file): pounds sterling, 2 decimals, `p` for pence
//!
//! Configuration is read-only once built.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::money::Money;

/// Largest supported number of minor-unit digits.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Receipt formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptConfig {
    /// Currency symbol placed before major-unit amounts.
    pub currency_symbol: String,

    /// Number of minor-unit digits after the decimal point.
    pub currency_decimals: u8,

    /// Suffix for prices shown in minor units (`50p`).
    pub minor_unit_suffix: String,
}

impl Default for ReceiptConfig {
    /// `£`, 2 decimals, `p`.
    fn default() -> Self {
        ReceiptConfig {
            currency_symbol: "£".to_string(),
            currency_decimals: 2,
            minor_unit_suffix: "p".to_string(),
        }
    }
}

impl ReceiptConfig {
    /// Builds a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BASKET_CURRENCY_SYMBOL`: override the currency symbol
    /// - `BASKET_CURRENCY_DECIMALS`: override the decimal places (0-4)
    /// - `BASKET_MINOR_UNIT_SUFFIX`: override the minor-unit suffix
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ReceiptConfig::default();

        if let Some(symbol) = lookup("BASKET_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("BASKET_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(d) if d <= MAX_CURRENCY_DECIMALS => config.currency_decimals = d,
                _ => warn!(value = %decimals, "ignoring invalid BASKET_CURRENCY_DECIMALS"),
            }
        }

        if let Some(suffix) = lookup("BASKET_MINOR_UNIT_SUFFIX") {
            config.minor_unit_suffix = suffix;
        }

        config
    }

    /// `currency_decimals`, capped at [`MAX_CURRENCY_DECIMALS`].
    fn decimals(&self) -> u8 {
        self.currency_decimals.min(MAX_CURRENCY_DECIMALS)
    }

    fn divisor(&self) -> i64 {
        10_i64.pow(self.decimals() as u32)
    }

    /// Formats an amount in major units, e.g. `£12.34` or `-£1.16`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::config::ReceiptConfig;
    /// use basket_core::money::Money;
    ///
    /// let config = ReceiptConfig::default();
    /// assert_eq!(config.format_currency(Money::from_pence(1234)), "£12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let pence = amount.pence();
        let divisor = self.divisor();
        let whole = (pence / divisor).abs();
        let frac = (pence % divisor).abs();
        let sign = if pence < 0 { "-" } else { "" };

        if self.decimals() == 0 {
            return format!("{}{}{}", sign, self.currency_symbol, whole);
        }

        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency_symbol,
            whole,
            frac,
            width = self.decimals() as usize
        )
    }

    /// Formats a unit price: minor units below one major unit (`50p`),
    /// otherwise as [`format_currency`](Self::format_currency).
    pub fn format_unit_price(&self, price: Money) -> String {
        if price.pence() < self.divisor() {
            format!("{}{}", price.pence(), self.minor_unit_suffix)
        } else {
            self.format_currency(price)
        }
    }
}
