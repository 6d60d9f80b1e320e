//! # Trend Calculator
//!
//! Period-over-period percentage math with the zero-baseline policy.
//!
//! ## Zero-Baseline Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 percentage_change(cur, prev)                        │
//! │                                                                     │
//! │  prev = 0, cur = 0   →    0      (nothing happened either period)   │
//! │  prev = 0, cur > 0   →  100      (growth from nothing is "100%")    │
//! │  prev > 0            →  ((cur - prev) / prev) × 100, 2 decimals     │
//! │                                                                     │
//! │  Examples:                                                          │
//! │    trend(150, 100) =  50.0                                          │
//! │    trend(50, 100)  = -50.0                                          │
//! │    trend(5, 0)     = 100.0                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages are the only place floats exist in this codebase; every
//! input is integer cents or an integer quantity.

use serde::{Deserialize, Serialize};

use crate::types::PeriodAggregate;

// =============================================================================
// Percentage Change
// =============================================================================

/// Percentage change between two period values, rounded to 2 decimals.
///
/// Implements the zero-baseline policy: comparing against an empty
/// previous period yields 100 when anything was sold, 0 when nothing was.
pub fn percentage_change(current: i64, previous: i64) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }

    let raw = (current - previous) as f64 / previous as f64 * 100.0;
    round2(raw)
}

/// Rounds to 2 decimal places for presentation.
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// Trend Message
// =============================================================================

/// Human-readable trend label for a store-wide percentage change.
///
/// `"upward trend of 50%"`, `"downward trend of 25%"` or `"no change"`.
pub fn trend_message(change: f64) -> String {
    if change > 0.0 {
        format!("upward trend of {}%", change)
    } else if change < 0.0 {
        format!("downward trend of {}%", change.abs())
    } else {
        "no change".to_string()
    }
}

// =============================================================================
// Per-Product Comparison
// =============================================================================

/// One product's current-vs-previous comparison row.
///
/// Every product present in the current period gets a row; products with
/// no sales in the previous period compare against zero totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub product_id: String,
    pub name: String,
    pub quantity_current: i64,
    pub revenue_current_cents: i64,
    pub quantity_previous: i64,
    pub revenue_previous_cents: i64,
    /// Quantity-sold change, same zero-baseline rule as the store level.
    pub percentage_change: f64,
}

/// Builds the per-product comparison list from two aggregated periods.
pub fn compare_products(
    current: &PeriodAggregate,
    previous: &PeriodAggregate,
) -> Vec<ProductComparison> {
    current
        .products
        .iter()
        .map(|cur| {
            let prev = previous.product(&cur.product_id);
            let quantity_previous = prev.map(|p| p.quantity_sold).unwrap_or(0);
            let revenue_previous_cents = prev.map(|p| p.revenue_cents).unwrap_or(0);

            ProductComparison {
                product_id: cur.product_id.clone(),
                name: cur.name.clone(),
                quantity_current: cur.quantity_sold,
                revenue_current_cents: cur.revenue_cents,
                quantity_previous,
                revenue_previous_cents,
                percentage_change: percentage_change(cur.quantity_sold, quantity_previous),
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
