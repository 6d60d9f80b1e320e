//! # Repository Layer
//!
//! Repositories own all SQL for their table(s).
//!
//! ## Repositories
//! - [`catalog::CatalogRepository`] - products (stock, prices)
//! - [`ledger::LedgerRepository`] - sale_entries (append-only) and the
//!   cross-table sale-commit transaction
//!
//! ## Pattern
//! Each repository holds a cloned `SqlitePool` (cheap, reference-counted)
//! and is constructed per call via `Database::catalog()` / `::ledger()`.

pub mod catalog;
pub mod ledger;
