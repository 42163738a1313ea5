//! # Domain Types
//!
//! The catalog item that everything else in the crate prices.
//!
//! ## Product Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product                                                                │
//! │  ─────────────                                                          │
//! │  code      "f1"   ◄── identity: two products are equal iff codes match  │
//! │  name      "Apple"                                                      │
//! │  price     50p                                                          │
//! │  category  'f'    ◄── derived from code[0], drives meal-deal buckets    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once built and are shared (`Arc<Product>`) between
//! callers and basket lines.

use serde::Serialize;
use std::hash::{Hash, Hasher};

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price_pence, validate_product_code, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    code: String,
    name: String,
    price_pence: i64,
    category: char,
    category_index: u8,
}

impl Product {
    /// Builds a validated product.
    ///
    /// ## Errors
    /// The first failing check wins, in this order:
    /// - [`ValidationError::InvalidCode`] unless `code` is a letter then a digit
    /// - [`ValidationError::InvalidName`] if `name` is empty
    /// - [`ValidationError::InvalidPrice`] if `price_pence` is negative
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::types::Product;
    ///
    /// let apple = Product::new("f1", "Apple", 50).unwrap();
    /// assert_eq!(apple.category(), 'f');
    /// assert!(Product::new("1f", "Apple", 50).is_err());
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price_pence: i64,
    ) -> Result<Self, ValidationError> {
        let code = code.into();
        let name = name.into();

        let (category, category_index) = validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_price_pence(price_pence)?;

        Ok(Product {
            code,
            name,
            price_pence,
            category,
            category_index,
        })
    }

    /// Unique identifier, e.g. `"f1"`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name shown on the receipt.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_pence(self.price_pence)
    }

    /// Category letter (first character of the code).
    #[inline]
    pub fn category(&self) -> char {
        self.category
    }

    /// Index within the category (second character of the code).
    #[inline]
    pub fn category_index(&self) -> u8 {
        self.category_index
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
