//! # Pricing Engine
//!
//! [`Basket`] ties the line store and the discount registry together and is
//! the surface a front end (CLI, UI) talks to.
//!
//! ## Pull Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   add / remove / update ──► BasketStore ──┐                             │
//! │                                           │  read on demand            │
//! │   add_discount / clear  ──► Registry   ───┤                             │
//! │                                           ▼                             │
//! │                            subtotal ─ discount = net                    │
//! │                                                                         │
//! │   Nothing is recomputed on mutation; every query reads the current     │
//! │   lines and re-evaluates every active rule against them.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::basket::{BasketLine, BasketStore};
use crate::config::ReceiptConfig;
use crate::discount::{DiscountOutcome, DiscountRule};
use crate::money::Money;
use crate::receipt::Receipt;
use crate::registry::DiscountRegistry;
use crate::types::Product;

// =============================================================================
// Basket
// =============================================================================

/// A shopping basket with its active discount codes.
#[derive(Debug, Default)]
pub struct Basket {
    store: BasketStore,
    discounts: DiscountRegistry,
}

impl Basket {
    /// Creates an empty basket using the standard discount catalog.
    pub fn new() -> Self {
        Self::with_registry(DiscountRegistry::new())
    }

    /// Creates an empty basket using `discounts` for code lookups.
    pub fn with_registry(discounts: DiscountRegistry) -> Self {
        Basket {
            store: BasketStore::new(),
            discounts,
        }
    }

    /// Adds one unit of `product`. Returns its new quantity.
    pub fn add_product(&mut self, product: &Arc<Product>) -> i64 {
        self.add_product_quantity(product, 1)
    }

    /// Adds `quantity` units of `product`. Returns its new quantity.
    pub fn add_product_quantity(&mut self, product: &Arc<Product>, quantity: i64) -> i64 {
        let new_qty = self.store.add(product, quantity);
        debug!(code = product.code(), quantity = new_qty, "product added");
        new_qty
    }

    /// Removes one unit of `product`. Returns its new quantity.
    pub fn remove_product(&mut self, product: &Product) -> i64 {
        let new_qty = self.store.remove(product);
        debug!(code = product.code(), quantity = new_qty, "product removed");
        new_qty
    }

    /// Sets the quantity of `product`. Returns `true` if the basket changed.
    ///
    /// See [`BasketStore::set_quantity`] for the exact rules.
    pub fn update_quantity(&mut self, product: &Arc<Product>, quantity: i64) -> bool {
        let changed = self.store.set_quantity(product, quantity);
        debug!(code = product.code(), quantity, changed, "quantity updated");
        changed
    }

    /// Current quantity of `product`.
    pub fn quantity_of(&self, product: &Product) -> i64 {
        self.store.quantity_of(product)
    }

    /// Empties the basket. Active discount codes stay registered.
    pub fn clear(&mut self) -> bool {
        self.store.clear()
    }

    /// Removes every discount code.
    pub fn clear_discount_codes(&mut self) -> bool {
        self.discounts.clear()
    }

    /// Activates a discount code. Returns the number of active codes.
    pub fn add_discount(&mut self, code: &str) -> usize {
        self.discounts.register(code)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.store.total_quantity()
    }

    /// Cost before discounts.
    pub fn total_cost(&self) -> Money {
        self.store.total_cost()
    }

    /// Sum of every active discount.
    pub fn total_discounts(&self) -> Money {
        self.discounts.total_discount(self.store.lines())
    }

    /// Cost after discounts. Not clamped at zero.
    pub fn net_total(&self) -> Money {
        self.total_cost() - self.total_discounts()
    }

    /// Basket lines in first-added order.
    pub fn lines(&self) -> &[BasketLine] {
        self.store.lines()
    }

    /// Active discount rules in registration order.
    pub fn discounts(&self) -> impl Iterator<Item = &dyn DiscountRule> + '_ {
        self.discounts.rules()
    }

    /// Per-rule results against the current lines, in registration order.
    pub fn discount_outcomes(&self) -> Vec<DiscountOutcome> {
        self.discounts.outcomes(self.store.lines())
    }

    /// Summary figures for the current basket.
    pub fn totals(&self) -> BasketTotals {
        BasketTotals::from(self)
    }

    /// Receipt text with the default (sterling) formatting.
    pub fn generate_receipt(&self) -> String {
        self.receipt_with(&ReceiptConfig::default())
    }

    /// Receipt text with custom formatting.
    pub fn receipt_with(&self, config: &ReceiptConfig) -> String {
        Receipt::new(self, config).to_string()
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// Basket totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub net: Money,
}

impl From<&Basket> for BasketTotals {
    fn from(basket: &Basket) -> Self {
        let subtotal = basket.total_cost();
        let discount = basket.total_discounts();

        BasketTotals {
            line_count: basket.store.line_count(),
            total_quantity: basket.total_quantity(),
            subtotal,
            discount,
            net: subtotal - discount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
