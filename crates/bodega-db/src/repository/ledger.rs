//! # Ledger Repository
//!
//! The append-only sale ledger, plus the sale-commit transaction.
//!
//! ## Sale Commit
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    commit_sale (one transaction)                    │
//! │                                                                     │
//! │  BEGIN                                                              │
//! │    │                                                                │
//! │    ├── SELECT stock FROM products WHERE id = ?                      │
//! │    │       └── no row → ProductMissing (rollback)                   │
//! │    │                                                                │
//! │    ├── UPDATE products SET stock = stock - qty                      │
//! │    │   WHERE id = ? AND stock >= qty      ← the overdraw guard      │
//! │    │       └── 0 rows → InsufficientStock (rollback)                │
//! │    │                                                                │
//! │    └── INSERT INTO sale_entries (...)                               │
//! │  COMMIT                                                             │
//! │                                                                     │
//! │  Either the stock decrement AND the ledger append happen, or        │
//! │  neither does. Two concurrent commits that would jointly overdraw   │
//! │  one product cannot both pass the conditional UPDATE.               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Append-Only
//! There is no UPDATE or DELETE for `sale_entries` anywhere in this crate.
//! The ledger is the analytics source of truth; entries are immutable.

use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use bodega_core::{EndBound, ProductSales, SaleEntry, TimeWindow};

/// Result of attempting to commit one sale.
///
/// Business outcomes are data, not errors: the caller (the sale recorder)
/// decides how each one surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Stock decremented and ledger entry appended.
    Committed,
    /// The product id resolved to no row; nothing was written.
    ProductMissing,
    /// Stock was below the requested quantity at commit time;
    /// nothing was written.
    InsufficientStock { available: i64 },
}

/// Repository for the sale ledger.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Commits one sale: conditional stock decrement + ledger append,
    /// atomically.
    ///
    /// ## Concurrency
    /// The availability read only distinguishes "missing product" from
    /// "not enough stock" for error reporting. The actual guard is the
    /// `stock >= quantity` condition on the UPDATE: a concurrent commit
    /// landing between the read and the write cannot cause an overdraw,
    /// it can only turn this commit into `InsufficientStock`.
    pub async fn commit_sale(&self, entry: &SaleEntry) -> DbResult<CommitOutcome> {
        debug!(
            product_id = %entry.product_id,
            quantity = %entry.quantity,
            "Committing sale"
        );

        let mut tx = self.pool.begin().await?;

        let available: Option<i64> = sqlx::query_scalar("SELECT stock FROM products WHERE id = ?1")
            .bind(&entry.product_id)
            .fetch_optional(&mut *tx)
            .await?;

        // Dropping the transaction without commit rolls it back.
        let Some(available) = available else {
            return Ok(CommitOutcome::ProductMissing);
        };

        let updated = sqlx::query(
            r#"
            UPDATE products
            SET stock = stock - ?2, updated_at = ?3
            WHERE id = ?1 AND stock >= ?2
            "#,
        )
        .bind(&entry.product_id)
        .bind(entry.quantity)
        .bind(entry.created_at)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(CommitOutcome::InsufficientStock { available });
        }

        sqlx::query(
            r#"
            INSERT INTO sale_entries (
                id, product_id, unit_price_cents, quantity, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.product_id)
        .bind(entry.unit_price_cents)
        .bind(entry.quantity)
        .bind(entry.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(
            entry_id = %entry.id,
            product_id = %entry.product_id,
            quantity = %entry.quantity,
            "Sale committed"
        );

        Ok(CommitOutcome::Committed)
    }

    /// Ledger entries inside a window, oldest first.
    ///
    /// The end comparator follows the window's bound: `<=` for the
    /// monthly-summary shape, `<` for the chart shape.
    pub async fn entries_in_window(&self, window: &TimeWindow) -> DbResult<Vec<SaleEntry>> {
        let sql = format!(
            r#"
            SELECT id, product_id, unit_price_cents, quantity, created_at
            FROM sale_entries
            WHERE created_at >= ?1 AND created_at {} ?2
            ORDER BY created_at
            "#,
            end_comparator(window)
        );

        let entries = sqlx::query_as::<_, SaleEntry>(&sql)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }

    /// Per-product totals for a window.
    ///
    /// Revenue sums the unit price *captured on each entry*; cost joins
    /// against the product's *current* buy price. The asymmetry is
    /// deliberate: repricing stock re-costs history, recorded revenue
    /// never changes.
    pub async fn aggregate(&self, window: &TimeWindow) -> DbResult<Vec<ProductSales>> {
        let sql = format!(
            r#"
            SELECT
                s.product_id AS product_id,
                p.name AS name,
                CAST(SUM(s.quantity) AS INTEGER) AS quantity_sold,
                CAST(SUM(s.unit_price_cents * s.quantity) AS INTEGER) AS revenue_cents,
                CAST(SUM(p.buy_price_cents * s.quantity) AS INTEGER) AS cost_cents
            FROM sale_entries s
            INNER JOIN products p ON p.id = s.product_id
            WHERE s.created_at >= ?1 AND s.created_at {} ?2
            GROUP BY s.product_id, p.name
            ORDER BY p.name
            "#,
            end_comparator(window)
        );

        let rows = sqlx::query_as::<_, ProductSales>(&sql)
            .bind(window.start)
            .bind(window.end)
            .fetch_all(&self.pool)
            .await?;

        debug!(products = rows.len(), "Aggregated window");
        Ok(rows)
    }

    /// Total number of ledger entries (append-only, so this only grows).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sale_entries")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// SQL comparator for a window's end bound. Not user input.
fn end_comparator(window: &TimeWindow) -> &'static str {
    match window.end_bound {
        EndBound::Inclusive => "<=",
        EndBound::Exclusive => "<",
    }
}

/// Helper to generate a new ledger entry ID.
pub fn generate_entry_id() -> String {
    Uuid::new_v4().to_string()
}
