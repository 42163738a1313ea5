//! Buy one, get one free on a single product code.

use crate::basket::BasketLine;
use crate::discount::{DiscountLabel, DiscountRule};
use crate::money::Money;

/// Every second unit of the target product is free.
///
/// ```text
/// Apple 50p × 5  ──►  matched = 5 / 2 = 2  ──►  discount = 2 × 50p = £1.00
/// ```
#[derive(Debug, Clone)]
pub struct Bogof {
    label: DiscountLabel,
    target_code: String,
}

impl Bogof {
    /// Creates a rule that frees every second unit of `target_code`.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        target_code: impl Into<String>,
    ) -> Self {
        Bogof {
            label: DiscountLabel::new(code, name),
            target_code: target_code.into(),
        }
    }

    /// The target line, if it holds at least one pair.
    ///
    /// Lines are unique by code, so there is at most one.
    fn matching_line<'a>(&self, lines: &'a [BasketLine]) -> Option<&'a BasketLine> {
        lines
            .iter()
            .find(|l| l.product().code() == self.target_code && l.quantity() >= 2)
    }
}

impl DiscountRule for Bogof {
    fn code(&self) -> &str {
        self.label.code()
    }

    fn name(&self) -> &str {
        self.label.name()
    }

    fn total_discount(&self, lines: &[BasketLine]) -> Money {
        self.matching_line(lines)
            .map(|l| l.product().price().multiply_quantity(l.quantity() / 2))
            .unwrap_or_default()
    }

    fn matched_instances(&self, lines: &[BasketLine]) -> i64 {
        self.matching_line(lines)
            .map(|l| l.quantity() / 2)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::test_support::lines;

    fn apple241() -> Bogof {
        Bogof::new("APPLE241", "2 for the price of 1 on apples", "f1")
    }

    #[test]
    fn test_four_apples_two_pairs() {
        let basket = lines(&[("f1", 50, 4)]);
        assert_eq!(apple241().matched_instances(&basket), 2);
        assert_eq!(apple241().total_discount(&basket).pence(), 100);
    }

    #[test]
    fn test_odd_quantity_rounds_pairs_down() {
        let basket = lines(&[("f1", 50, 5)]);
        assert_eq!(apple241().matched_instances(&basket), 2);
        assert_eq!(apple241().total_discount(&basket).pence(), 100);
    }

    #[test]
    fn test_single_unit_does_not_match() {
        let basket = lines(&[("f1", 50, 1), ("f2", 30, 1)]);
        assert_eq!(apple241().matched_instances(&basket), 0);
        assert_eq!(apple241().total_discount(&basket), Money::zero());
    }

    #[test]
    fn test_other_products_ignored() {
        let basket = lines(&[("f2", 30, 6), ("f1", 50, 2)]);
        let outcome = apple241().evaluate(&basket);
        assert_eq!(outcome.code, "APPLE241");
        assert_eq!(outcome.matched_instances, 1);
        assert_eq!(outcome.discount.pence(), 50);
    }

    #[test]
    fn test_empty_basket() {
        assert_eq!(apple241().evaluate(&[]).discount, Money::zero());
    }
}
