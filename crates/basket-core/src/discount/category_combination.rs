//! # Category Combination ("meal deal")
//!
//! One item from each of N categories, each at X% off.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  categories = {f, d, s}, 25% off                                        │
//! │                                                                         │
//! │  1. Bucket lines by category (lines outside the set are ignored)       │
//! │       f: [Apple 50p ×2]                                                 │
//! │       d: [Cola 100p ×2]                                                 │
//! │       s: [Cheese sandwich 150p ×2, Chicken wrap 200p ×1]                │
//! │                                                                         │
//! │  2. matched = min(bucket quantity) = min(2, 2, 3) = 2                   │
//! │                                                                         │
//! │  3. Per bucket, walk lines in basket order, discounting up to           │
//! │     `matched` units:                                                    │
//! │       f: 50 × 2 × 25 / 100  = 25                                        │
//! │       d: 100 × 2 × 25 / 100 = 50                                        │
//! │       s: 150 × 2 × 25 / 100 = 75   (budget spent, wrap not reached)     │
//! │                                                                         │
//! │  discount = 25 + 50 + 75 = £1.50                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each consumed slice is truncated on its own before summing.
//!
//! Which lines get "first dibs" inside a bucket is the basket's first-added
//! order. Two products in the same category at different prices can change the
//! total depending on which one was put in the basket first.

use crate::basket::BasketLine;
use crate::discount::{DiscountLabel, DiscountRule};
use crate::money::Money;

/// Percent off one item from each of a set of categories.
#[derive(Debug, Clone)]
pub struct CategoryCombination {
    label: DiscountLabel,
    categories: Vec<char>,
    percent_off: u32,
}

impl CategoryCombination {
    /// Duplicate categories are collapsed; `{f, f, d}` is the set `{f, d}`.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        categories: &[char],
        percent_off: u32,
    ) -> Self {
        let mut unique = Vec::with_capacity(categories.len());
        for &c in categories {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        CategoryCombination {
            label: DiscountLabel::new(code, name),
            categories: unique,
            percent_off,
        }
    }

    /// One bucket per category, each holding its lines in basket order.
    fn buckets<'a>(&self, lines: &'a [BasketLine]) -> Vec<Vec<&'a BasketLine>> {
        self.categories
            .iter()
            .map(|&category| {
                lines
                    .iter()
                    .filter(|l| l.product().category() == category)
                    .collect()
            })
            .collect()
    }

    fn complete_sets(buckets: &[Vec<&BasketLine>]) -> i64 {
        buckets
            .iter()
            .map(|bucket| {
                bucket
                    .iter()
                    .fold(0_i64, |acc, l| acc.saturating_add(l.quantity()))
            })
            .min()
            .unwrap_or(0)
    }

    fn bucket_discount(&self, bucket: &[&BasketLine], sets: i64) -> Money {
        let mut remaining = sets;
        let mut total = Money::zero();

        for line in bucket {
            if remaining <= 0 {
                break;
            }

            let consumed = remaining.min(line.quantity());
            total += line
                .product()
                .price()
                .multiply_quantity(consumed)
                .percentage_truncated(self.percent_off);
            remaining -= consumed;
        }

        total
    }
}

impl DiscountRule for CategoryCombination {
    fn code(&self) -> &str {
        self.label.code()
    }

    fn name(&self) -> &str {
        self.label.name()
    }

    fn total_discount(&self, lines: &[BasketLine]) -> Money {
        let buckets = self.buckets(lines);
        let sets = Self::complete_sets(&buckets);
        if sets == 0 {
            return Money::zero();
        }

        buckets
            .iter()
            .map(|bucket| self.bucket_discount(bucket, sets))
            .sum()
    }

    fn matched_instances(&self, lines: &[BasketLine]) -> i64 {
        Self::complete_sets(&self.buckets(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::test_support::lines;

    fn md1() -> CategoryCombination {
        CategoryCombination::new("MD1", "Meal deal", &['f', 'd', 's'], 25)
    }

    #[test]
    fn test_one_of_each_truncates_per_item() {
        let basket = lines(&[("f1", 50, 1), ("d1", 100, 1), ("s1", 150, 1)]);
        assert_eq!(md1().matched_instances(&basket), 1);
        // 12 + 25 + 37
        assert_eq!(md1().total_discount(&basket).pence(), 74);
    }

    #[test]
    fn test_missing_category_means_no_deal() {
        let basket = lines(&[("f1", 50, 1), ("d1", 100, 1)]);
        assert_eq!(md1().matched_instances(&basket), 0);
        assert_eq!(md1().total_discount(&basket), Money::zero());
    }

    #[test]
    fn test_surplus_item_not_discounted() {
        let basket = lines(&[
            ("f1", 50, 2),
            ("d1", 100, 2),
            ("s1", 150, 2),
            ("s2", 200, 1),
        ]);
        assert_eq!(md1().matched_instances(&basket), 2);
        assert_eq!(md1().total_discount(&basket).pence(), 150);
    }

    #[test]
    fn test_budget_spans_multiple_lines_in_basket_order() {
        // s bucket: wrap first (1 unit), then sandwich (1 of its 3 units)
        let basket = lines(&[
            ("s2", 200, 1),
            ("f1", 50, 2),
            ("d1", 100, 2),
            ("s1", 150, 3),
        ]);
        assert_eq!(md1().matched_instances(&basket), 2);
        // f: 25, d: 50, s: 200×1×25/100 + 150×1×25/100 = 50 + 37
        assert_eq!(md1().total_discount(&basket).pence(), 162);
    }

    #[test]
    fn test_walk_order_changes_total() {
        let wrap_first = lines(&[
            ("s2", 200, 1),
            ("s1", 150, 1),
            ("f1", 50, 1),
            ("d1", 100, 1),
        ]);
        let sandwich_first = lines(&[
            ("s1", 150, 1),
            ("s2", 200, 1),
            ("f1", 50, 1),
            ("d1", 100, 1),
        ]);

        assert_eq!(md1().total_discount(&wrap_first).pence(), 12 + 25 + 50);
        assert_eq!(md1().total_discount(&sandwich_first).pence(), 12 + 25 + 37);
    }

    #[test]
    fn test_other_categories_ignored() {
        let basket = lines(&[
            ("f1", 50, 1),
            ("x1", 999, 5),
            ("d1", 100, 1),
            ("s1", 150, 1),
        ]);
        assert_eq!(md1().matched_instances(&basket), 1);
        assert_eq!(md1().total_discount(&basket).pence(), 74);
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let deal = CategoryCombination::new("MD2", "Snack pair", &['f', 'f', 'd'], 50);
        let basket = lines(&[("f1", 50, 1), ("d1", 100, 1)]);
        assert_eq!(deal.matched_instances(&basket), 1);
        assert_eq!(deal.total_discount(&basket).pence(), 75);
    }

    #[test]
    fn test_huge_basket_saturates() {
        let basket = lines(&[
            ("f1", 5_000_000_000_000_000_000, 2),
            ("d1", 100, i64::MAX),
            ("d2", 100, i64::MAX),
            ("s1", 150, 2),
        ]);
        assert_eq!(md1().matched_instances(&basket), 2);
        // f slice saturates to i64::MAX before the 25% is taken
        assert_eq!(md1().total_discount(&basket).pence(), i64::MAX / 4 + 50 + 75);
    }

    #[test]
    fn test_no_categories_never_matches() {
        let deal = CategoryCombination::new("NONE", "Nothing", &[], 50);
        let basket = lines(&[("f1", 50, 1)]);
        assert_eq!(deal.evaluate(&basket).matched_instances, 0);
        assert_eq!(deal.evaluate(&basket).discount, Money::zero());
    }
}
