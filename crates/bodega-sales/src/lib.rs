//! # bodega-sales: Sale Recording + Analytics Services
//!
//! The two operations this system exists for:
//!
//! 1. **Record a sale** - [`SaleRecorder::record_sale`] validates the
//!    request and commits the stock decrement + ledger append atomically.
//! 2. **Answer trend queries** - [`AnalyticsService`] aggregates the
//!    ledger over paired time windows and derives period-over-period
//!    trends: the store-wide monthly summary and the configurable chart
//!    comparison.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  record_sale ──► LedgerRepository::commit_sale                      │
//! │                      │                                              │
//! │                      ├── products.stock  (conditional decrement)    │
//! │                      └── sale_entries    (append)                   │
//! │                                                                     │
//! │  monthly_summary ──► aggregate(current) + aggregate(previous)       │
//! │  sales_chart     ──► aggregate(current) + aggregate(previous)       │
//! │                      │                                              │
//! │                      └──► trend math ──► response DTOs              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers embed these services behind whatever transport they like; the
//! DTOs in [`dto`] are the wire contracts, and [`SalesError`] maps every
//! failure to an HTTP status and a public message.

pub mod analytics;
pub mod dto;
pub mod error;
pub mod recorder;

pub use analytics::AnalyticsService;
pub use error::{SalesError, SalesResult};
pub use recorder::SaleRecorder;
