//! # Sale Recorder
//!
//! Validates and commits one sale.
//!
//! ## Why There Is No Read-Then-Write Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ❌ WRONG (check-then-act race):                                    │
//! │     let product = catalog.get_by_id(id).await?;                     │
//! │     if product.stock >= qty {          ← another sale commits here  │
//! │         catalog.decrement(id, qty);    ← stock goes negative        │
//! │     }                                                               │
//! │                                                                     │
//! │  ✅ DONE INSTEAD:                                                   │
//! │     ledger.commit_sale(&entry)         ← conditional decrement +    │
//! │                                          append, one transaction    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The recorder never reads stock itself; availability is decided inside
//! the commit transaction, so two concurrent sales of the same product
//! serialize on the conditional update.
//!
//! ## Retries
//! `record_sale` carries no idempotency key: retrying after an ambiguous
//! failure (e.g. a timeout after commit) can record the sale twice.
//! Callers that need safe retries must deduplicate upstream.

use chrono::Utc;
use tracing::{debug, info};

use bodega_core::{CoreError, Money, SaleEntry};
use bodega_db::repository::ledger::generate_entry_id;
use bodega_db::{CommitOutcome, Database};

use crate::dto::RecordSaleRequest;
use crate::error::SalesResult;

/// Service that records sales against the catalog and the ledger.
#[derive(Debug, Clone)]
pub struct SaleRecorder {
    db: Database,
}

impl SaleRecorder {
    /// Creates a new SaleRecorder.
    pub fn new(db: Database) -> Self {
        SaleRecorder { db }
    }

    /// Records one sale: decrements stock and appends a ledger entry,
    /// atomically.
    ///
    /// ## Errors
    /// * `CoreError::InvalidQuantity` - quantity is zero or negative
    /// * `CoreError::ProductNotFound` - product id resolves to nothing
    /// * `CoreError::InsufficientStock` - stock below quantity at commit
    ///
    /// Every error path leaves stock and ledger untouched.
    pub async fn record_sale(
        &self,
        product_id: &str,
        quantity: i64,
        unit_price: Money,
    ) -> SalesResult<SaleEntry> {
        debug!(product_id = %product_id, quantity = %quantity, "record_sale");

        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity(quantity).into());
        }

        let entry = SaleEntry {
            id: generate_entry_id(),
            product_id: product_id.to_string(),
            unit_price_cents: unit_price.cents(),
            quantity,
            created_at: Utc::now(),
        };

        match self.db.ledger().commit_sale(&entry).await? {
            CommitOutcome::Committed => {
                info!(
                    entry_id = %entry.id,
                    product_id = %product_id,
                    quantity = %quantity,
                    revenue = %entry.revenue(),
                    "Sale recorded"
                );
                Ok(entry)
            }
            CommitOutcome::ProductMissing => {
                Err(CoreError::ProductNotFound(product_id.to_string()).into())
            }
            CommitOutcome::InsufficientStock { available } => Err(CoreError::InsufficientStock {
                product_id: product_id.to_string(),
                available,
                requested: quantity,
            }
            .into()),
        }
    }

    /// Records a sale from the wire-shaped request body.
    pub async fn record(&self, request: &RecordSaleRequest) -> SalesResult<SaleEntry> {
        self.record_sale(
            &request.id_product,
            request.stock,
            Money::from_cents(request.sell_price),
        )
        .await
    }
}
