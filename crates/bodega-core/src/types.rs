//! # Domain Types
//!
//! Core domain types for the Bodega sales engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │    Product      │   │   SaleEntry     │   │  ProductSales    │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │  │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  product_id      │  │
//! │  │  name           │   │  product_id     │   │  quantity_sold   │  │
//! │  │  stock          │   │  unit_price     │   │  revenue_cents   │  │
//! │  │  buy/sell price │   │  quantity       │   │  cost_cents      │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────┘  │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │  PeriodAggregate = Vec<ProductSales> + PeriodTotals         │   │
//! │  │  Derived per query, never persisted                         │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `SaleEntry.unit_price_cents` is the price *at the time of sale*, frozen
//! on the entry. Revenue aggregation always uses this captured price.
//! Cost aggregation deliberately does NOT snapshot: it joins against the
//! product's current `buy_price_cents` at query time. That asymmetry is a
//! known accuracy limitation carried from the observed system behavior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product with current stock and pricing.
///
/// Invariant: `stock >= 0` at all times, including under concurrent sale
/// commits. The ledger repository enforces this with a conditional
/// decrement; the schema backs it with a CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown in analytics responses.
    pub name: String,

    /// Current stock level. Never negative.
    pub stock: i64,

    /// Purchase price in cents (cost basis for analytics).
    pub buy_price_cents: i64,

    /// Selling price in cents.
    pub sell_price_cents: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the purchase price as a Money type.
    #[inline]
    pub fn buy_price(&self) -> Money {
        Money::from_cents(self.buy_price_cents)
    }

    /// Returns the selling price as a Money type.
    #[inline]
    pub fn sell_price(&self) -> Money {
        Money::from_cents(self.sell_price_cents)
    }

    /// Checks whether the requested quantity can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.stock >= quantity
    }
}

// =============================================================================
// Sale Entry
// =============================================================================

/// One event in the append-only sale ledger.
///
/// Immutable once created: never updated or deleted. The ledger is the
/// source of truth for all analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SaleEntry {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Weak reference to the product sold (no ownership).
    pub product_id: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold. Always positive.
    pub quantity: i64,

    /// When the sale was committed.
    pub created_at: DateTime<Utc>,
}

impl SaleEntry {
    /// Returns the captured unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Revenue contribution of this entry (`unit_price × quantity`).
    #[inline]
    pub fn revenue(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Aggregates (derived, never persisted)
// =============================================================================

/// Per-product totals over one time window.
///
/// Produced by the ledger aggregation query; `name` is carried along so
/// response shaping needs no second catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductSales {
    pub product_id: String,
    pub name: String,
    /// Total units sold in the window.
    pub quantity_sold: i64,
    /// Σ (captured unit price × quantity), in cents.
    pub revenue_cents: i64,
    /// Σ (current buy price × quantity), in cents. Live price, not snapshot.
    pub cost_cents: i64,
}

impl ProductSales {
    /// Window revenue as Money.
    #[inline]
    pub fn revenue(&self) -> Money {
        Money::from_cents(self.revenue_cents)
    }

    /// Window cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

/// Window-wide totals: sums of all per-product values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub quantity_sold: i64,
    pub revenue_cents: i64,
    pub cost_cents: i64,
}

/// Aggregation of the ledger over one time window.
///
/// Recomputed per query; has no independent lifecycle. An empty window is
/// a valid aggregate with zero totals, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// Per-product rows, one per product with at least one sale in window.
    pub products: Vec<ProductSales>,
    /// Sums across all products.
    pub totals: PeriodTotals,
}

impl PeriodAggregate {
    /// Builds an aggregate from per-product rows, deriving window totals.
    pub fn from_products(products: Vec<ProductSales>) -> Self {
        let totals = products.iter().fold(PeriodTotals::default(), |acc, p| {
            PeriodTotals {
                quantity_sold: acc.quantity_sold + p.quantity_sold,
                revenue_cents: acc.revenue_cents + p.revenue_cents,
                cost_cents: acc.cost_cents + p.cost_cents,
            }
        });

        PeriodAggregate { products, totals }
    }

    /// True when no ledger entry fell inside the window.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up the row for one product, if it sold in the window.
    pub fn product(&self, product_id: &str) -> Option<&ProductSales> {
        self.products.iter().find(|p| p.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
