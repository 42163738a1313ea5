//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    25% of 50p = 50 × 25 / 100 = 12p (truncated, never 12.5p)           │
//! │    We KNOW we dropped half a penny, and every rule drops it the        │
//! │    same way                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_pence(50);
//! let line = price.multiply_quantity(4);        // £2.00
//! assert_eq!(line.percentage_truncated(10).pence(), 20);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the single minor unit the engine knows about).
///
/// Signed so that a misconfigured discount set can drive a net total below
/// zero without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_pence(150); // £1.50
    /// assert_eq!(price.pence(), 150);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pounds) portion, truncated toward zero.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(30);
    /// assert_eq!(unit_price.multiply_quantity(3).pence(), 90);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Returns `percent`% of this amount, truncating toward zero.
    ///
    /// The multiplication happens before the division:
    /// `Money::from_pence(150).percentage_truncated(25)` is `3750 / 100 = 37`.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(50).percentage_truncated(25).pence(), 12);
    /// assert_eq!(Money::from_pence(40).percentage_truncated(10).pence(), 4);
    /// ```
    pub fn percentage_truncated(&self, percent: u32) -> Money {
        // i128 keeps large baskets from overflowing the intermediate product
        let amount = self.0 as i128 * percent as i128 / 100;
        Money(amount.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

// Arithmetic saturates instead of overflowing: a basket holding absurd
// quantities prices at the `i64` bounds rather than panicking or wrapping.

/// Shows money as pounds and pence, e.g. `£2.40` or `-£1.16`.
///
/// Receipt rendering goes through [`ReceiptConfig`](crate::config::ReceiptConfig)
/// so the symbol can be configured; this impl is for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(240).to_string(), "£2.40");
        assert_eq!(Money::from_pence(5).to_string(), "£0.05");
        assert_eq!(Money::from_pence(-116).to_string(), "-£1.16");
        assert_eq!(Money::zero().to_string(), "£0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a - b).pence(), 500);
        assert_eq!((a * 3).pence(), 3000);
        assert_eq!((b - a).pence(), -500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_pence(5_000_000_000_000_000_000);
        assert_eq!(huge.multiply_quantity(2).pence(), i64::MAX);
        assert_eq!((huge + huge).pence(), i64::MAX);
        assert_eq!((Money::zero() - huge - huge).pence(), i64::MIN);
        assert_eq!([huge, huge].iter().sum::<Money>().pence(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_pence(100), Money::from_pence(24)];
        assert_eq!(amounts.iter().sum::<Money>().pence(), 124);
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_percentage_truncates() {
        assert_eq!(Money::from_pence(50).percentage_truncated(25).pence(), 12);
        assert_eq!(Money::from_pence(100).percentage_truncated(25).pence(), 25);
        assert_eq!(Money::from_pence(150).percentage_truncated(25).pence(), 37);
        assert_eq!(Money::from_pence(200).percentage_truncated(10).pence(), 20);
        assert_eq!(Money::from_pence(9).percentage_truncated(10).pence(), 0);
    }

    #[test]
    fn test_percentage_does_not_overflow() {
        let big = Money::from_pence(i64::MAX / 10);
        assert_eq!(big.percentage_truncated(100), big);
        assert_eq!(Money::from_pence(i64::MAX).percentage_truncated(200).pence(), i64::MAX);
    }
}
