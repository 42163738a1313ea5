//! # Validation Module
//!
//! Field validators used by [`Product::new`](crate::types::Product::new).
//!
//! ## Product Code Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   "f1"                                                                  │
//! │    ││                                                                   │
//! │    │└── category index: a single ASCII digit                           │
//! │    └─── category: a single letter (f = fruit, d = drink, s = sandwich) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_product_code, validate_price_pence};
//!
//! assert_eq!(validate_product_code("f1").unwrap(), ('f', 1));
//! assert!(validate_price_pence(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code and splits it into `(category, category_index)`.
///
/// ## Rules
/// - Exactly 2 characters
/// - First character is alphabetic (the category)
/// - Second character is an ASCII digit (the index within the category)
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_product_code;
///
/// assert!(validate_product_code("d1").is_ok());
/// assert!(validate_product_code("1d").is_err());
/// assert!(validate_product_code("f").is_err());
/// ```
pub fn validate_product_code(code: &str) -> ValidationResult<(char, u8)> {
    let mut chars = code.chars();

    let (Some(category), Some(index), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ValidationError::InvalidCode);
    };

    if !category.is_alphabetic() {
        return Err(ValidationError::InvalidCode);
    }

    let index = index.to_digit(10).ok_or(ValidationError::InvalidCode)?;

    Ok((category, index as u8))
}

/// Validates a product name.
///
/// Any non-empty string is accepted, whitespace included.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName);
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in pence.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, e.g. as part of an offer)
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_price_pence;
///
/// assert!(validate_price_pence(50).is_ok());
/// assert!(validate_price_pence(0).is_ok());
/// assert!(validate_price_pence(-100).is_err());
/// ```
pub fn validate_price_pence(pence: i64) -> ValidationResult<()> {
    if pence < 0 {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("f1", Ok(('f', 1)))]
    #[case("S9", Ok(('S', 9)))]
    #[case("", Err(ValidationError::InvalidCode))]
    #[case("f", Err(ValidationError::InvalidCode))]
    #[case("f12", Err(ValidationError::InvalidCode))]
    #[case("11", Err(ValidationError::InvalidCode))]
    #[case("1f", Err(ValidationError::InvalidCode))]
    #[case("ff", Err(ValidationError::InvalidCode))]
    #[case("-1", Err(ValidationError::InvalidCode))]
    fn test_validate_product_code(
        #[case] code: &str,
        #[case] expected: ValidationResult<(char, u8)>,
    ) {
        assert_eq!(validate_product_code(code), expected);
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Cheese sandwich").is_ok());
        assert!(validate_product_name(" ").is_ok());
        assert_eq!(validate_product_name(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_validate_price_pence() {
        assert!(validate_price_pence(0).is_ok());
        assert!(validate_price_pence(150).is_ok());
        assert_eq!(validate_price_pence(-1), Err(ValidationError::InvalidPrice));
    }
}
