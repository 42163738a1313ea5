//! # Receipt Rendering
//!
//! Turns a [`Basket`] into itemised receipt text.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === Items ===                                                          │
//! │  4x Apple @ 50p = £2.00              ◄── one line per basket line       │
//! │  1x Pear @ 40p = £0.40                   (first-added order)            │
//! │  Sub-total = £2.40                                                      │
//! │                                                                         │
//! │  === Discounts ===                   ◄── only if codes are active       │
//! │  2x APPLE241 = -£1.00                    (registration order)           │
//! │  1x BDD = -£0.24                                                        │
//! │  Sub-total = -£1.24                                                     │
//! │                                                                         │
//! │  === Total ===                                                          │
//! │  £1.16p                              ◄── trailing "p" is part of the    │
//! │                                          established receipt format     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty basket renders as an empty string.

use std::fmt;

use crate::config::ReceiptConfig;
use crate::money::Money;
use crate::pricing::Basket;

/// A basket paired with the formatting to print it with.
///
/// Render with `to_string()` or `{}`.
#[derive(Debug, Clone, Copy)]
pub struct Receipt<'a> {
    basket: &'a Basket,
    config: &'a ReceiptConfig,
}

impl<'a> Receipt<'a> {
    /// Wraps `basket` for rendering with `config`.
    pub fn new(basket: &'a Basket, config: &'a ReceiptConfig) -> Self {
        Receipt { basket, config }
    }

    fn write_items(&self, f: &mut fmt::Formatter<'_>) -> Result<Money, fmt::Error> {
        writeln!(f, "=== Items ===")?;

        let mut subtotal = Money::zero();
        for line in self.basket.lines() {
            let product = line.product();
            let line_total = line.line_total();
            subtotal += line_total;

            writeln!(
                f,
                "{}x {} @ {} = {}",
                line.quantity(),
                product.name(),
                self.config.format_unit_price(product.price()),
                self.config.format_currency(line_total)
            )?;
        }

        writeln!(f, "Sub-total = {}", self.config.format_currency(subtotal))?;
        Ok(subtotal)
    }

    fn write_discounts(&self, f: &mut fmt::Formatter<'_>) -> Result<Money, fmt::Error> {
        let outcomes = self.basket.discount_outcomes();
        if outcomes.is_empty() {
            return Ok(Money::zero());
        }

        writeln!(f)?;
        writeln!(f, "=== Discounts ===")?;

        let mut subtotal = Money::zero();
        for outcome in &outcomes {
            subtotal += outcome.discount;
            writeln!(
                f,
                "{}x {} = -{}",
                outcome.matched_instances,
                outcome.code,
                self.config.format_currency(outcome.discount)
            )?;
        }

        writeln!(f, "Sub-total = -{}", self.config.format_currency(subtotal))?;
        Ok(subtotal)
    }
}

impl fmt::Display for Receipt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.basket.lines().is_empty() {
            return Ok(());
        }

        let items = self.write_items(f)?;
        let discounts = self.write_discounts(f)?;

        writeln!(f)?;
        writeln!(f, "=== Total ===")?;
        writeln!(f, "{}p", self.config.format_currency(items - discounts))
    }
}
