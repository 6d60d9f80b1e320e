//! # Analytics Facade
//!
//! Composes the ledger aggregation with the trend calculator to answer
//! the two supported query shapes.
//!
//! ## Query Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  monthly_summary (no parameters)                                    │
//! │    current:  [1st of month ... now]        (inclusive ends)         │
//! │    previous: [1st of prior month ... 1st of month]                  │
//! │    empty current month → zero totals, NOT an error                  │
//! │                                                                     │
//! │  sales_chart (filter: 7days | 1month | 3months | default)           │
//! │    current:  [derived start ... now)       (half-open ends)         │
//! │    previous: [derived start ... current start)                      │
//! │    empty current window → NoSalesInPeriod (404)                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The empty-window asymmetry between the two shapes is contract, not an
//! accident. Both queries are read-only snapshots: no isolation is
//! promised against sales committing mid-scan, and re-running a query is
//! always safe.

use chrono::{DateTime, Utc};
use tracing::debug;

use bodega_core::trend::{compare_products, percentage_change, trend_message};
use bodega_core::{ChartFilter, MonthlyWindows, PeriodAggregate, TimeWindow};
use bodega_db::Database;

use crate::dto::{ChartResponse, PeriodTotalsBody, ProductSoldBody, StoreSummaryResponse};
use crate::error::{SalesError, SalesResult};

/// Read-only analytics over the sale ledger.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    db: Database,
}

impl AnalyticsService {
    /// Creates a new AnalyticsService.
    pub fn new(db: Database) -> Self {
        AnalyticsService { db }
    }

    /// Store-wide "this month vs last month" summary.
    pub async fn monthly_summary(&self) -> SalesResult<StoreSummaryResponse> {
        self.monthly_summary_at(Utc::now()).await
    }

    /// Summary pinned to an explicit `now` (the testable seam).
    pub async fn monthly_summary_at(
        &self,
        now: DateTime<Utc>,
    ) -> SalesResult<StoreSummaryResponse> {
        let windows = MonthlyWindows::at(now);
        debug!(
            current_start = %windows.current.start,
            previous_start = %windows.previous.start,
            "monthly_summary"
        );

        let current = self.aggregate(&windows.current).await?;
        let previous = self.aggregate(&windows.previous).await?;
        let total_stock = self.db.catalog().total_stock().await?;

        Ok(StoreSummaryResponse {
            total_stock,
            sales_trend_percentage: percentage_change(
                current.totals.quantity_sold,
                previous.totals.quantity_sold,
            ),
            revenue_trend_percentage: percentage_change(
                current.totals.revenue_cents,
                previous.totals.revenue_cents,
            ),
            cost_trend_percentage: percentage_change(
                current.totals.cost_cents,
                previous.totals.cost_cents,
            ),
            products_sold: current.products.iter().map(ProductSoldBody::from).collect(),
            current_month_sales: PeriodTotalsBody::from(current.totals),
            previous_month_sales: PeriodTotalsBody::from(previous.totals),
        })
    }

    /// Configurable-window product comparison for the chart view.
    ///
    /// ## Errors
    /// * `SalesError::NoSalesInPeriod` - the *current* window is empty.
    ///   An empty previous window is fine (zero baseline).
    pub async fn sales_chart(&self, filter: ChartFilter) -> SalesResult<ChartResponse> {
        self.sales_chart_at(filter, Utc::now()).await
    }

    /// Chart comparison pinned to an explicit `now` (the testable seam).
    pub async fn sales_chart_at(
        &self,
        filter: ChartFilter,
        now: DateTime<Utc>,
    ) -> SalesResult<ChartResponse> {
        let windows = filter.windows_at(now);
        debug!(
            ?filter,
            current_start = %windows.current.start,
            previous_start = %windows.previous.start,
            "sales_chart"
        );

        let current = self.aggregate(&windows.current).await?;
        if current.is_empty() {
            return Err(SalesError::NoSalesInPeriod);
        }

        let previous = self.aggregate(&windows.previous).await?;

        let change = percentage_change(
            current.totals.quantity_sold,
            previous.totals.quantity_sold,
        );

        Ok(ChartResponse {
            trend_message: trend_message(change),
            total_sales_current: current.totals.quantity_sold,
            total_sales_previous: previous.totals.quantity_sold,
            percentage_change: change,
            product_comparison: compare_products(&current, &previous)
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    /// One window scan, folded into the derived aggregate.
    async fn aggregate(&self, window: &TimeWindow) -> SalesResult<PeriodAggregate> {
        let rows = self.db.ledger().aggregate(window).await?;
        Ok(PeriodAggregate::from_products(rows))
    }
}
