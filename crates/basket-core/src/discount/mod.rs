//! # Discount Rules
//!
//! The rule contract and its three variants.
//!
//! ## Rule Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How a rule sees the basket                           │
//! │                                                                         │
//! │  BasketStore.lines() ──► &[BasketLine] ──┬──► Bogof                    │
//! │  (read-only snapshot)                    ├──► CategoryCombination      │
//! │                                          └──► AllItems                 │
//! │                                                     │                   │
//! │                                                     ▼                   │
//! │                             (total_discount, matched_instances)         │
//! │                                                                         │
//! │  Rules hold only their parameters. Every call recomputes from the      │
//! │  lines it is handed; nothing is cached between calls.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules never read each other's results. That independence is what lets the
//! registry sum them in any order, including in parallel; a rule that depends
//! on another rule's output would need a sequential pipeline instead.

mod all_items;
mod bogof;
mod category_combination;

pub use all_items::AllItems;
pub use bogof::Bogof;
pub use category_combination::CategoryCombination;

use serde::Serialize;
use std::fmt;

use crate::basket::BasketLine;
use crate::money::Money;

// =============================================================================
// Rule Contract
// =============================================================================

/// A discount that can be applied to a basket.
pub trait DiscountRule: fmt::Debug + Send + Sync {
    /// Code the customer enters, e.g. `"APPLE241"`.
    fn code(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Amount to take off the basket. Never negative.
    fn total_discount(&self, lines: &[BasketLine]) -> Money;

    /// How many times the rule fires against these lines.
    fn matched_instances(&self, lines: &[BasketLine]) -> i64;

    /// Both figures at once, labelled with the rule's code and name.
    fn evaluate(&self, lines: &[BasketLine]) -> DiscountOutcome {
        DiscountOutcome {
            code: self.code().to_string(),
            name: self.name().to_string(),
            matched_instances: self.matched_instances(lines),
            discount: self.total_discount(lines),
        }
    }
}

/// Code and display name shared by every rule variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountLabel {
    code: String,
    name: String,
}

impl DiscountLabel {
    /// Pairs a discount code with its display name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        DiscountLabel {
            code: code.into(),
            name: name.into(),
        }
    }

    /// The code customers enter, e.g. `"MD1"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable rule name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One rule's result against one basket snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountOutcome {
    pub code: String,
    pub name: String,
    pub matched_instances: i64,
    pub discount: Money,
}
