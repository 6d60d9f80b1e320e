//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of the Bodega sales engine. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  bodega-sales (Services)                      │ │
//! │  │    SaleRecorder ──► AnalyticsService ──► response DTOs        │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ bodega-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐     │ │
//! │  │   │  types   │  │  money   │  │  window  │  │  trend   │     │ │
//! │  │   │ Product  │  │  Money   │  │TimeWindow│  │ % change │     │ │
//! │  │   │SaleEntry │  │  cents   │  │ filters  │  │ messages │     │ │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘     │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO DATABASE • NO CLOCK READS • PURE FUNCTIONS      │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                  bodega-db (Database Layer)                   │ │
//! │  │        SQLite catalog + append-only sale ledger               │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SaleEntry, PeriodAggregate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`window`] - Time-window selection for the two analytics query shapes
//! - [`trend`] - Period-over-period percentage math with zero-baseline rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - the current time
//!    is always an argument, never read from the system clock
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod trend;
pub mod types;
pub mod window;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
pub use window::{ChartFilter, EndBound, MonthlyWindows, TimeWindow};
