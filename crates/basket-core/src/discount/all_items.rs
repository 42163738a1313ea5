//! Storewide percentage off.

use crate::basket::BasketLine;
use crate::discount::{DiscountLabel, DiscountRule};
use crate::money::Money;

/// `percent_off`% off every line, truncated line by line.
///
/// Always matches exactly once, covering the whole basket.
#[derive(Debug, Clone)]
pub struct AllItems {
    label: DiscountLabel,
    percent_off: u32,
}

impl AllItems {
    /// Creates a rule taking `percent_off`% off every line.
    pub fn new(code: impl Into<String>, name: impl Into<String>, percent_off: u32) -> Self {
        AllItems {
            label: DiscountLabel::new(code, name),
            percent_off,
        }
    }
}

impl DiscountRule for AllItems {
    fn code(&self) -> &str {
        self.label.code()
    }

    fn name(&self) -> &str {
        self.label.name()
    }

    fn total_discount(&self, lines: &[BasketLine]) -> Money {
        lines
            .iter()
            .map(|l| l.line_total().percentage_truncated(self.percent_off))
            .sum()
    }

    fn matched_instances(&self, _lines: &[BasketLine]) -> i64 {
        1
    }
}
