//! # Basket Store
//!
//! Keyed collection of basket lines, one per product code.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Basket Store Operations                              │
//! │                                                                         │
//! │  Operation                 Line absent            Line present          │
//! │  ─────────                 ───────────            ────────────          │
//! │                                                                         │
//! │  add(p, n)                 create with n          qty += n              │
//! │  remove(p)                 no-op, returns 0       qty -= 1 (drop at 1)  │
//! │  set_quantity(p, 0)        true (nothing to do)   drop line             │
//! │  set_quantity(p, n > 0)    create with n          qty = n               │
//! │  set_quantity(p, n < 0)    false                  false                 │
//! │                                                                         │
//! │  INVARIANT: a stored line always has quantity >= 1                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines keep the order in which their product was first added. Receipt item
//! lines and the meal-deal walk both rely on that order.

use std::sync::Arc;
use tracing::debug;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Basket Line
// =============================================================================

/// One product and how many of it are in the basket.
#[derive(Debug, Clone)]
pub struct BasketLine {
    product: Arc<Product>,
    quantity: i64,
}

impl BasketLine {
    fn new(product: Arc<Product>, quantity: i64) -> Self {
        BasketLine { product, quantity }
    }

    /// The product on this line.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the basket (always >= 1 while stored).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Basket Store
// =============================================================================

/// The basket's lines, unique by product code.
#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    lines: Vec<BasketLine>,
}

impl BasketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BasketStore { lines: Vec::new() }
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.code() == code)
    }

    /// Adds `quantity` units of `product`, creating the line if needed.
    ///
    /// Returns the product's new quantity. A non-positive `quantity` is not an
    /// increment and leaves the store untouched.
    pub fn add(&mut self, product: &Arc<Product>, quantity: i64) -> i64 {
        if quantity < 1 {
            debug!(code = product.code(), quantity, "ignoring non-positive add");
            return self.quantity_of(product);
        }

        if let Some(idx) = self.position(product.code()) {
            let line = &mut self.lines[idx];
            line.quantity = line.quantity.saturating_add(quantity);
            return line.quantity;
        }

        self.lines.push(BasketLine::new(Arc::clone(product), quantity));
        quantity
    }

    /// Takes one unit of `product` out of the basket.
    ///
    /// Returns the product's new quantity; `0` if it was absent or this was
    /// its last unit (the line is then dropped).
    pub fn remove(&mut self, product: &Product) -> i64 {
        let Some(idx) = self.position(product.code()) else {
            debug!(code = product.code(), "remove of product not in basket");
            return 0;
        };

        if self.lines[idx].quantity <= 1 {
            self.lines.remove(idx);
            return 0;
        }

        self.lines[idx].quantity -= 1;
        self.lines[idx].quantity
    }

    /// Sets the quantity of `product` to exactly `quantity`.
    ///
    /// ## Returns
    /// - `false` if `quantity` is negative (rejected, nothing changes)
    /// - `false` if the line already holds exactly `quantity`
    /// - `true` otherwise, including setting an absent product to `0`: zero
    ///   was requested and zero was "added"
    pub fn set_quantity(&mut self, product: &Arc<Product>, quantity: i64) -> bool {
        if quantity < 0 {
            debug!(code = product.code(), quantity, "rejecting negative quantity");
            return false;
        }

        match self.position(product.code()) {
            Some(idx) if self.lines[idx].quantity == quantity => false,
            Some(idx) if quantity == 0 => {
                self.lines.remove(idx);
                true
            }
            Some(idx) => {
                self.lines[idx].quantity = quantity;
                true
            }
            None => {
                if quantity > 0 {
                    self.add(product, quantity);
                }
                true
            }
        }
    }

    /// Current quantity of `product`, `0` if absent.
    pub fn quantity_of(&self, product: &Product) -> i64 {
        self.position(product.code())
            .map(|idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    /// Empties the store. Returns `true` iff there was anything to remove.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }

        self.lines.clear();
        true
    }

    /// Sum of all line quantities, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of price × quantity over all lines.
    pub fn total_cost(&self) -> Money {
        self.lines.iter().map(BasketLine::line_total).sum()
    }

    /// All lines, in first-added order.
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(code: &str, price: i64) -> Arc<Product> {
        Arc::new(Product::new(code, format!("Product {code}"), price).unwrap())
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BasketStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_quantity(), 0);
        assert_eq!(store.total_cost(), Money::zero());
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);
        let banana = product("f2", 30);

        assert_eq!(store.add(&apple, 1), 1);
        store.add(&banana, 1);
        assert_eq!(store.add(&apple, 1), 2);
        store.add(&banana, 2);

        assert_eq!(store.line_count(), 2);
        assert_eq!(store.quantity_of(&apple), 2);
        assert_eq!(store.quantity_of(&banana), 3);
        assert_eq!(store.total_quantity(), 5);
        assert_eq!(store.total_cost().pence(), 190);
    }

    #[test]
    fn test_add_non_positive_is_ignored() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);

        assert_eq!(store.add(&apple, 0), 0);
        assert!(store.is_empty());

        store.add(&apple, 2);
        assert_eq!(store.add(&apple, -1), 2);
    }

    #[test]
    fn test_remove_decrements_then_drops() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);
        store.add(&apple, 2);

        assert_eq!(store.remove(&apple), 1);
        assert_eq!(store.quantity_of(&apple), 1);

        assert_eq!(store.remove(&apple), 0);
        assert_eq!(store.quantity_of(&apple), 0);
        assert!(store.lines().is_empty());
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut store = BasketStore::new();
        store.add(&product("f1", 50), 1);

        assert_eq!(store.remove(&product("f2", 30)), 0);
        assert_eq!(store.total_quantity(), 1);
    }

    #[test]
    fn test_set_quantity_existing() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);
        store.add(&apple, 1);

        assert!(store.set_quantity(&apple, 15));
        assert_eq!(store.quantity_of(&apple), 15);

        assert!(!store.set_quantity(&apple, 15));
    }

    #[test]
    fn test_set_quantity_absent_adds() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);

        assert!(store.set_quantity(&apple, 15));
        assert_eq!(store.quantity_of(&apple), 15);
    }

    #[test]
    fn test_set_quantity_negative_rejected() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);

        assert!(!store.set_quantity(&apple, -15));
        assert_eq!(store.quantity_of(&apple), 0);

        store.add(&apple, 1);
        assert!(!store.set_quantity(&apple, -15));
        assert_eq!(store.quantity_of(&apple), 1);
    }

    #[test]
    fn test_set_quantity_zero() {
        let mut store = BasketStore::new();
        let apple = product("f1", 50);

        // absent + zero still reports a change
        assert!(store.set_quantity(&apple, 0));
        assert!(store.is_empty());

        store.add(&apple, 3);
        assert!(store.set_quantity(&apple, 0));
        assert_eq!(store.quantity_of(&apple), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = BasketStore::new();
        assert!(!store.clear());

        store.add(&product("f1", 50), 2);
        assert!(store.clear());
        assert!(store.is_empty());
    }

    #[test]
    fn test_lines_keep_first_added_order() {
        let mut store = BasketStore::new();
        let cola = product("d1", 100);
        let apple = product("f1", 50);
        store.add(&cola, 1);
        store.add(&apple, 1);
        store.add(&cola, 1);

        let codes: Vec<&str> = store.lines().iter().map(|l| l.product().code()).collect();
        assert_eq!(codes, ["d1", "f1"]);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut store = BasketStore::new();
        let gold = product("g1", 5_000_000_000_000_000_000);
        let silver = product("g2", 1);

        store.add(&gold, 2);
        store.add(&silver, i64::MAX);
        assert_eq!(store.add(&silver, i64::MAX), i64::MAX);

        assert_eq!(store.total_quantity(), i64::MAX);
        assert_eq!(store.total_cost().pence(), i64::MAX);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, i64),
        Remove(usize),
        Set(usize, i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4usize, 1..5i64).prop_map(|(p, q)| Op::Add(p, q)),
            (0..4usize).prop_map(Op::Remove),
            (0..4usize, -3..6i64).prop_map(|(p, q)| Op::Set(p, q)),
        ]
    }

    proptest! {
        #[test]
        fn prop_total_quantity_matches_per_product(ops in proptest::collection::vec(op(), 0..40)) {
            let products = [
                product("f1", 50),
                product("f2", 30),
                product("d1", 100),
                product("s1", 150),
            ];
            let mut store = BasketStore::new();

            for op in ops {
                match op {
                    Op::Add(p, q) => { store.add(&products[p], q); }
                    Op::Remove(p) => { store.remove(&products[p]); }
                    Op::Set(p, q) => {
                        let before = store.quantity_of(&products[p]);
                        let changed = store.set_quantity(&products[p], q);
                        if q < 0 {
                            prop_assert!(!changed);
                            prop_assert_eq!(store.quantity_of(&products[p]), before);
                        }
                    }
                }
            }

            let per_product: i64 = products.iter().map(|p| store.quantity_of(p)).sum();
            prop_assert_eq!(store.total_quantity(), per_product);
            prop_assert!(store.lines().iter().all(|l| l.quantity() >= 1));
        }
    }
}
