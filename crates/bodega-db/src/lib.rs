//! # bodega-db: SQLite Persistence for Bodega
//!
//! Owns the product catalog table and the append-only sale ledger.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                           bodega-db                                 │
//! │                                                                     │
//! │  pool        DbConfig + Database handle (WAL, FK on, migrations)    │
//! │  migrations  Embedded SQL migrations                                │
//! │  repository  CatalogRepository (products)                           │
//! │              LedgerRepository  (sale_entries + sale commit)         │
//! │  error       DbError taxonomy + sqlx mapping                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The One Hard Problem Here
//! `LedgerRepository::commit_sale` performs the stock check-and-decrement
//! and the ledger append in a single transaction with a conditional
//! `UPDATE ... WHERE stock >= ?`. Two concurrent sales that would jointly
//! overdraw a product cannot both succeed, and a sale never decrements
//! stock without its matching ledger row.

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::catalog::CatalogRepository;
pub use repository::ledger::{CommitOutcome, LedgerRepository};
