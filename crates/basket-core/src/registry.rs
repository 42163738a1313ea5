//! # Discount Registry
//!
//! Maps discount codes to at most one active rule each.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  register("MD1")                                                        │
//! │       │                                                                 │
//! │       ├── already registered? ──► no-op, return count                   │
//! │       │                                                                 │
//! │       ├── not in catalog?      ──► ignored (logged), return count       │
//! │       │                                                                 │
//! │       └── catalog entry found  ──► build rule, append, return count     │
//! │                                                                         │
//! │  Catalog (extend by adding rows, not by adding branches):              │
//! │    APPLE241 → Bogof(f1)                                                 │
//! │    MD1      → CategoryCombination({f, d, s}, 25%)                       │
//! │    BDD      → AllItems(10%)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are kept in registration order for receipt rendering. Totals are
//! summed with a parallel reduction, which is only sound while rules stay
//! independent of one another.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::basket::BasketLine;
use crate::discount::{AllItems, Bogof, CategoryCombination, DiscountOutcome, DiscountRule};
use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// One row of the code → rule table.
#[derive(Debug, Clone, Copy)]
pub struct DiscountEntry {
    pub code: &'static str,
    pub build: fn() -> Box<dyn DiscountRule>,
}

/// The discount codes the shop recognises.
pub static DISCOUNT_CATALOG: &[DiscountEntry] = &[
    DiscountEntry {
        code: "APPLE241",
        build: || Box::new(Bogof::new("APPLE241", "2 for the price of 1 on apples", "f1")),
    },
    DiscountEntry {
        code: "MD1",
        build: || Box::new(CategoryCombination::new("MD1", "Meal deal", &['f', 'd', 's'], 25)),
    },
    DiscountEntry {
        code: "BDD",
        build: || Box::new(AllItems::new("BDD", "Bargain discount day", 10)),
    },
];

// =============================================================================
// Registry
// =============================================================================

/// Active discount rules, unique by code, in registration order.
#[derive(Debug)]
pub struct DiscountRegistry {
    catalog: &'static [DiscountEntry],
    rules: Vec<Box<dyn DiscountRule>>,
}

impl DiscountRegistry {
    /// Creates an empty registry backed by [`DISCOUNT_CATALOG`].
    pub fn new() -> Self {
        Self::with_catalog(DISCOUNT_CATALOG)
    }

    /// Creates an empty registry backed by a custom catalog.
    pub fn with_catalog(catalog: &'static [DiscountEntry]) -> Self {
        DiscountRegistry {
            catalog,
            rules: Vec::new(),
        }
    }

    /// Activates the rule for `code`.
    ///
    /// Returns the number of active rules afterwards. Re-registering a code
    /// and registering an unknown code both leave the registry unchanged.
    pub fn register(&mut self, code: &str) -> usize {
        if self.contains(code) {
            debug!(code, "discount already registered");
            return self.rules.len();
        }

        match self.catalog.iter().find(|entry| entry.code == code) {
            Some(entry) => {
                self.rules.push((entry.build)());
                debug!(code, count = self.rules.len(), "discount registered");
            }
            None => warn!(code, "ignoring unknown discount code"),
        }

        self.rules.len()
    }

    /// Checks if a rule with this code is active.
    pub fn contains(&self, code: &str) -> bool {
        self.rules.iter().any(|r| r.code() == code)
    }

    /// Removes every rule. Returns `true` iff there was anything to remove.
    pub fn clear(&mut self) -> bool {
        if self.rules.is_empty() {
            return false;
        }

        self.rules.clear();
        true
    }

    /// Number of active rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Checks if no rule is active.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Active rules in registration order.
    pub fn rules(&self) -> impl Iterator<Item = &dyn DiscountRule> + '_ {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Sum of every rule's discount against `lines`.
    ///
    /// Rules are evaluated in parallel; integer addition makes the sum
    /// independent of evaluation order.
    pub fn total_discount(&self, lines: &[BasketLine]) -> Money {
        self.rules
            .par_iter()
            .map(|rule| rule.total_discount(lines))
            .sum()
    }

    /// Each rule's result against `lines`, in registration order.
    pub fn outcomes(&self, lines: &[BasketLine]) -> Vec<DiscountOutcome> {
        self.rules
            .par_iter()
            .map(|rule| rule.evaluate(lines))
            .collect()
    }
}

impl Default for DiscountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
