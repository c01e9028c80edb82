//! # stock-core: Domain Logic for Stockroom
//!
//! Product types and input coercion, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 stock-cli (MenuController)                      │   │
//! │  │    Add ──► List ──► Update ──► Delete ──► Exit                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stock-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │   error   │                  │   │
//! │  │   │  Product  │  │  parse_*  │  │ Validation│                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stock-db (ProductStore)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, NewProduct, ProductField, FieldUpdate
//! - [`validation`] - Parsing raw input into typed values
//! - [`error`] - Validation errors
//!
//! ## Example Usage
//!
//! ```rust
//! use stock_core::validation::parse_quantity;
//! use stock_core::{FieldUpdate, NewProduct, ProductField};
//!
//! let product = NewProduct::new("Teclado", parse_quantity("10").unwrap(), 120.50);
//! assert_eq!(product.quantity, 10);
//!
//! let update = FieldUpdate::parse(ProductField::Price, "99.90").unwrap();
//! assert_eq!(update.field(), ProductField::Price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
pub use validation::ValidationResult;
