//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  bodega-core errors (this file)                                     │
//! │  └── CoreError   - Business rule violations                         │
//! │                                                                     │
//! │  bodega-db errors (separate crate)                                  │
//! │  └── DbError     - Database operation failures                      │
//! │                                                                     │
//! │  bodega-sales errors (service crate)                                │
//! │  └── SalesError  - What callers see (status + message)              │
//! │                                                                     │
//! │  Flow: CoreError / DbError → SalesError → structured failure body   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Core business logic errors.
///
/// These errors represent business rule violations detected before any
/// mutation happens; none of them leaves a partial side effect behind.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not resolve to an existing product.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the available stock.
    ///
    /// ## When This Occurs
    /// The conditional stock decrement found `stock < quantity` at commit
    /// time, including the case where a concurrent sale drained the stock
    /// between the availability read and the decrement.
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// Sale quantity must be a positive integer.
    #[error("Invalid quantity: {0}, must be positive")]
    InvalidQuantity(i64),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
