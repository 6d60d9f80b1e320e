//! # Service Error Type
//!
//! Unified error type for the sale-recording and analytics services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Error Flow in Bodega                          │
//! │                                                                     │
//! │  CoreError (business rule)  ──┐                                     │
//! │                               ├──► SalesError ──► status + message  │
//! │  DbError (storage fault)    ──┘                                     │
//! │                                                                     │
//! │  The transport layer renders the status and a structured failure    │
//! │  body; internal detail (SQL text, ids, stack traces) never leaves   │
//! │  this crate.                                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use bodega_core::CoreError;
use bodega_db::DbError;

/// Error returned from the sale-recording and analytics services.
#[derive(Debug, Error)]
pub enum SalesError {
    /// Business rule violation (validation, missing product, oversell).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The chart query's current window matched no ledger entries.
    ///
    /// Only the chart path signals this; the monthly summary returns
    /// zero totals for an empty month instead. The asymmetry is part of
    /// the observed contract.
    #[error("No sales found in this period")]
    NoSalesInPeriod,

    /// Storage-layer fault.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl SalesError {
    /// HTTP status the transport should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            SalesError::Core(CoreError::ProductNotFound(_)) => 404,
            SalesError::Core(CoreError::InsufficientStock { .. }) => 400,
            SalesError::Core(CoreError::InvalidQuantity(_)) => 400,
            SalesError::NoSalesInPeriod => 404,
            SalesError::Db(_) => 500,
        }
    }

    /// User-facing message. Storage faults collapse to a generic message;
    /// everything else uses the contract wording.
    pub fn public_message(&self) -> String {
        match self {
            SalesError::Core(CoreError::ProductNotFound(_)) => {
                "Producto no encontrado.".to_string()
            }
            SalesError::Core(CoreError::InsufficientStock { .. }) => {
                "Stock insuficiente para realizar la venta.".to_string()
            }
            SalesError::Core(CoreError::InvalidQuantity(_)) => {
                "La cantidad debe ser mayor que cero.".to_string()
            }
            SalesError::NoSalesInPeriod => "No sales found in this period".to_string(),
            SalesError::Db(_) => "Error interno del servidor.".to_string(),
        }
    }
}

/// Result type for service operations.
pub type SalesResult<T> = Result<T, SalesError>;

// =============================================================================
// Unit Tests
// =============================================================================
