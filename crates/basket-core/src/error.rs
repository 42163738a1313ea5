//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError          - What callers of the crate see                    │
//! │  └── ValidationError - Product construction failures                   │
//! │                                                                         │
//! │  NOT errors (reported through return values instead):                  │
//! │  • Unknown discount codes      → registry size unchanged               │
//! │  • Negative set-quantity       → `false` (no change)                   │
//! │  • Removing an absent product  → `0`                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The discount engine itself never fails on valid input

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the crate's public entry points.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No product with this code exists in the catalog being consulted.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product construction failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product construction failures.
///
/// Exactly one variant is reported per failed construction; checks run in
/// the order code, name, price.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Code is not a letter followed by a single digit.
    #[error("Invalid Code specified. Code must be a 2 character string \"<char><int>\".")]
    InvalidCode,

    /// Name is empty.
    #[error("Invalid Name specified. A non-null and non-empty name must be specified.")]
    InvalidName,

    /// Price is negative.
    #[error("Invalid Price specified. Price must be a positive pence value.")]
    InvalidPrice,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("z9".to_string());
        assert_eq!(err.to_string(), "Product not found: z9");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::InvalidCode.to_string(),
            "Invalid Code specified. Code must be a 2 character string \"<char><int>\"."
        );
        assert_eq!(
            ValidationError::InvalidPrice.to_string(),
            "Invalid Price specified. Price must be a positive pence value."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::InvalidName.into();
        assert_eq!(core_err, CoreError::Validation(ValidationError::InvalidName));
    }
}
