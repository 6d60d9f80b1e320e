//! # Response Contracts
//!
//! The JSON shapes callers receive, camelCase on the wire.
//!
//! ## Field Naming
//! The contracts mirror the observed system, quirks included:
//! - `stock` on the sale request/entry bodies is the *quantity sold*,
//!   not a stock level
//! - `sellPrice` is the unit price the sale was charged at
//! - monetary fields are integer cents, percentages are floats
//!
//! ## Failure Bodies
//! Two shapes, on purpose:
//! - sale recording: `{ "success": false, "message": "..." }`
//! - chart query:    `{ "success": false, "error": { "message": "..." } }`

use serde::{Deserialize, Serialize};

use bodega_core::trend::ProductComparison;
use bodega_core::{PeriodTotals, ProductSales, SaleEntry};

use crate::error::SalesError;

// =============================================================================
// Sale Recording
// =============================================================================

/// Request body for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSaleRequest {
    /// Product being sold.
    pub id_product: String,
    /// Quantity sold (contract name carried from the observed system).
    pub stock: i64,
    /// Unit price in cents at which the sale happened.
    pub sell_price: i64,
}

/// The committed ledger entry, as returned to the caller (HTTP 201).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleEntryBody {
    pub id: String,
    pub id_product: String,
    /// Captured unit price in cents.
    pub sell_price: i64,
    /// Quantity sold.
    pub stock: i64,
    pub created_at: String,
}

impl From<&SaleEntry> for SaleEntryBody {
    fn from(entry: &SaleEntry) -> Self {
        SaleEntryBody {
            id: entry.id.clone(),
            id_product: entry.product_id.clone(),
            sell_price: entry.unit_price_cents,
            stock: entry.quantity,
            created_at: entry.created_at.to_rfc3339(),
        }
    }
}

// =============================================================================
// Store-Wide Monthly Summary
// =============================================================================

/// Totals for one month, store-wide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotalsBody {
    pub total_stock_sold: i64,
    /// Cents.
    pub total_revenue: i64,
    /// Cents.
    pub total_cost: i64,
}

impl From<PeriodTotals> for PeriodTotalsBody {
    fn from(totals: PeriodTotals) -> Self {
        PeriodTotalsBody {
            total_stock_sold: totals.quantity_sold,
            total_revenue: totals.revenue_cents,
            total_cost: totals.cost_cents,
        }
    }
}

/// One product's sales inside the current month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSoldBody {
    pub id_product: String,
    pub name: String,
    pub total_stock_sold: i64,
    /// Cents.
    pub total_revenue: i64,
}

impl From<&ProductSales> for ProductSoldBody {
    fn from(row: &ProductSales) -> Self {
        ProductSoldBody {
            id_product: row.product_id.clone(),
            name: row.name.clone(),
            total_stock_sold: row.quantity_sold,
            total_revenue: row.revenue_cents,
        }
    }
}

/// Store-wide "this month vs last month" summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummaryResponse {
    /// Units on hand across the whole catalog, right now.
    pub total_stock: i64,
    pub current_month_sales: PeriodTotalsBody,
    pub previous_month_sales: PeriodTotalsBody,
    pub sales_trend_percentage: f64,
    pub revenue_trend_percentage: f64,
    pub cost_trend_percentage: f64,
    pub products_sold: Vec<ProductSoldBody>,
}

// =============================================================================
// Chart / Product Comparison
// =============================================================================

/// One row of the chart's per-product comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductComparisonBody {
    pub id_product: String,
    pub name: String,
    /// Cents.
    pub total_price_current: i64,
    pub total_stock_sold_current: i64,
    /// Cents.
    pub total_price_previous: i64,
    pub total_stock_sold_previous: i64,
    pub percentage_change: f64,
}

impl From<ProductComparison> for ProductComparisonBody {
    fn from(cmp: ProductComparison) -> Self {
        ProductComparisonBody {
            id_product: cmp.product_id,
            name: cmp.name,
            total_price_current: cmp.revenue_current_cents,
            total_stock_sold_current: cmp.quantity_current,
            total_price_previous: cmp.revenue_previous_cents,
            total_stock_sold_previous: cmp.quantity_previous,
            percentage_change: cmp.percentage_change,
        }
    }
}

/// Chart comparison over a named window filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub trend_message: String,
    pub total_sales_current: i64,
    pub total_sales_previous: i64,
    pub percentage_change: f64,
    pub product_comparison: Vec<ProductComparisonBody>,
}

// =============================================================================
// Failure Bodies
// =============================================================================

/// Flat failure body used by the sale-recording path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}

impl FailureResponse {
    pub fn from_error(err: &SalesError) -> Self {
        FailureResponse {
            success: false,
            message: err.public_message(),
        }
    }
}

/// Nested failure body used by the chart path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFailureResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ChartFailureResponse {
    pub fn from_error(err: &SalesError) -> Self {
        ChartFailureResponse {
            success: false,
            error: ErrorDetail {
                message: err.public_message(),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
