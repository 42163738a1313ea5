//! # basket-core: Shopping Basket Pricing Engine
//!
//! A mutable basket of priced products, a set of independently applicable
//! discount rules, and an itemised receipt. All money is integer pence.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        basket-core                                      │
//! │                                                                         │
//! │  ┌───────────┐   ┌─────────────┐   ┌──────────────────────────────┐    │
//! │  │  types    │──►│   basket    │──►│          pricing             │    │
//! │  │  Product  │   │ BasketStore │   │  Basket: subtotal, discount, │    │
//! │  └───────────┘   │ BasketLine  │   │          net, totals         │    │
//! │                  └─────────────┘   └──────────────┬───────────────┘    │
//! │  ┌───────────┐   ┌─────────────┐                  │                    │
//! │  │ discount  │──►│  registry   │──────────────────┤                    │
//! │  │ Bogof     │   │ code → rule │                  ▼                    │
//! │  │ CategoryC.│   └─────────────┘          ┌──────────────┐             │
//! │  │ AllItems  │                            │   receipt    │◄── config   │
//! │  └───────────┘                            └──────────────┘             │
//! │                                                                         │
//! │   NO PERSISTENCE • NO NETWORK • NO FLOATING POINT                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product
//! - [`money`] - Money type with integer arithmetic
//! - [`basket`] - Basket lines and the keyed line store
//! - [`discount`] - Discount rule contract and variants
//! - [`registry`] - Discount code table and active rules
//! - [`pricing`] - The `Basket` facade and totals
//! - [`receipt`] - Receipt text
//! - [`config`] - Receipt formatting configuration
//! - [`error`] - Error types
//! - [`validation`] - Product field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use basket_core::{Basket, Product};
//!
//! let apple = Arc::new(Product::new("f1", "Apple", 50).unwrap());
//! let pear = Arc::new(Product::new("f3", "Pear", 40).unwrap());
//!
//! let mut basket = Basket::new();
//! basket.add_product_quantity(&apple, 4);
//! basket.add_product(&pear);
//! basket.add_discount("APPLE241");
//! basket.add_discount("BDD");
//!
//! assert_eq!(basket.total_cost().pence(), 240);
//! assert_eq!(basket.total_discounts().pence(), 124);
//! assert!(basket.generate_receipt().ends_with("£1.16p\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod config;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod registry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{BasketLine, BasketStore};
pub use config::ReceiptConfig;
pub use discount::{AllItems, Bogof, CategoryCombination, DiscountOutcome, DiscountRule};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{Basket, BasketTotals};
pub use receipt::Receipt;
pub use registry::{DiscountEntry, DiscountRegistry, DISCOUNT_CATALOG};
pub use types::Product;
