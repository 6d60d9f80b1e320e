//! # Time Windows
//!
//! Window selection for the two analytics query shapes.
//!
//! ## Two Boundary Rules, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Window Boundary Semantics                          │
//! │                                                                     │
//! │  Monthly summary (inclusive ends, >= start AND <= end):             │
//! │                                                                     │
//! │    previous: [prior month 1st ───────── month 1st]                  │
//! │    current:                    [month 1st ───────── now]            │
//! │                                                                     │
//! │  Chart comparison (half-open, >= start AND < end):                  │
//! │                                                                     │
//! │    previous: [prev start ───────── current start)                   │
//! │    current:               [current start ───────── now)             │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two query shapes use different boundary rules because behavior
//! parity with the observed system is required. Each [`TimeWindow`]
//! carries its own [`EndBound`], so the ledger query picks the right
//! comparator per window instead of hard-coding one rule.
//!
//! All functions here are pure: `now` is always a parameter.

use chrono::{DateTime, Datelike, Duration, Months, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Time Window
// =============================================================================

/// How the end of a window is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndBound {
    /// `created_at <= end` (monthly summary rule).
    Inclusive,
    /// `created_at < end` (chart rule).
    Exclusive,
}

/// A time interval used to filter ledger entries.
///
/// The start is always inclusive; the end bound depends on the query shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub end_bound: EndBound,
}

impl TimeWindow {
    /// A window with an inclusive end (`[start, end]`).
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeWindow {
            start,
            end,
            end_bound: EndBound::Inclusive,
        }
    }

    /// A window with an exclusive end (`[start, end)`).
    pub fn half_open(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeWindow {
            start,
            end,
            end_bound: EndBound::Exclusive,
        }
    }

    /// Whether a timestamp falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if at < self.start {
            return false;
        }
        match self.end_bound {
            EndBound::Inclusive => at <= self.end,
            EndBound::Exclusive => at < self.end,
        }
    }
}

// =============================================================================
// Month Boundaries
// =============================================================================

/// Midnight UTC on the first day of `at`'s month.
pub fn month_start(at: DateTime<Utc>) -> DateTime<Utc> {
    // Day 1 of a valid month always exists and Utc has no DST gaps,
    // so the fallback never fires in practice.
    at.date_naive()
        .with_day(1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(at)
}

/// `at` shifted back by whole calendar months.
fn months_back(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_sub_months(Months::new(months)).unwrap_or(at)
}

// =============================================================================
// Monthly Summary Windows
// =============================================================================

/// Window pair for the store-wide monthly summary.
///
/// Current window runs first-of-month to now; previous window runs
/// first-of-prior-month to first-of-current-month. Both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyWindows {
    pub current: TimeWindow,
    pub previous: TimeWindow,
}

impl MonthlyWindows {
    /// Derives the summary windows for the month containing `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        let current_start = month_start(now);
        let previous_start = months_back(current_start, 1);

        MonthlyWindows {
            current: TimeWindow::closed(current_start, now),
            previous: TimeWindow::closed(previous_start, current_start),
        }
    }
}

// =============================================================================
// Chart Filter
// =============================================================================

/// Named window filter for the product-comparison chart.
///
/// The default (no filter, or an unrecognized one) is the current
/// calendar month compared against the prior calendar month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFilter {
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[default]
    CurrentMonth,
}

/// Window pair for the chart comparison. Half-open ends; the previous
/// window always ends exactly where the current one starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartWindows {
    pub current: TimeWindow,
    pub previous: TimeWindow,
}

impl ChartFilter {
    /// Parses the `filter` query parameter. Unknown values and `None`
    /// fall back to the current-calendar-month default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("7days") => ChartFilter::SevenDays,
            Some("1month") => ChartFilter::OneMonth,
            Some("3months") => ChartFilter::ThreeMonths,
            _ => ChartFilter::CurrentMonth,
        }
    }

    /// Derives `(currentStart, previousStart, previousEnd)` for this filter
    /// and wraps them into half-open windows ending at `now`.
    pub fn windows_at(&self, now: DateTime<Utc>) -> ChartWindows {
        let (current_start, previous_start) = match self {
            ChartFilter::SevenDays => (now - Duration::days(7), now - Duration::days(14)),
            ChartFilter::OneMonth => (months_back(now, 1), months_back(now, 2)),
            ChartFilter::ThreeMonths => (months_back(now, 3), months_back(now, 6)),
            ChartFilter::CurrentMonth => {
                let start = month_start(now);
                (start, months_back(start, 1))
            }
        };

        ChartWindows {
            current: TimeWindow::half_open(current_start, now),
            previous: TimeWindow::half_open(previous_start, current_start),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_month_start() {
        assert_eq!(
            month_start(at(2026, 8, 30, 15, 42, 7)),
            at(2026, 8, 1, 0, 0, 0)
        );
        assert_eq!(month_start(at(2026, 1, 1, 0, 0, 0)), at(2026, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_monthly_windows_boundary_inclusion() {
        let now = at(2026, 8, 30, 12, 0, 0);
        let windows = MonthlyWindows::at(now);
        let boundary = at(2026, 8, 1, 0, 0, 0);

        // Entry stamped exactly at the month start belongs to the current
        // window; one millisecond earlier does not.
        assert!(windows.current.contains(boundary));
        assert!(!windows
            .current
            .contains(boundary - Duration::milliseconds(1)));
        assert!(windows
            .previous
            .contains(boundary - Duration::milliseconds(1)));
    }

    #[test]
    fn test_monthly_windows_previous_span() {
        let windows = MonthlyWindows::at(at(2026, 8, 30, 12, 0, 0));

        assert_eq!(windows.previous.start, at(2026, 7, 1, 0, 0, 0));
        assert_eq!(windows.previous.end, at(2026, 8, 1, 0, 0, 0));
        assert_eq!(windows.previous.end_bound, EndBound::Inclusive);
    }

    #[test]
    fn test_monthly_windows_across_year_boundary() {
        let windows = MonthlyWindows::at(at(2026, 1, 15, 9, 0, 0));

        assert_eq!(windows.current.start, at(2026, 1, 1, 0, 0, 0));
        assert_eq!(windows.previous.start, at(2025, 12, 1, 0, 0, 0));
    }

    #[test]
    fn test_chart_filter_parse() {
        assert_eq!(ChartFilter::parse(Some("7days")), ChartFilter::SevenDays);
        assert_eq!(ChartFilter::parse(Some("1month")), ChartFilter::OneMonth);
        assert_eq!(ChartFilter::parse(Some("3months")), ChartFilter::ThreeMonths);
        assert_eq!(ChartFilter::parse(Some("1year")), ChartFilter::CurrentMonth);
        assert_eq!(ChartFilter::parse(None), ChartFilter::CurrentMonth);
    }

    #[test]
    fn test_chart_windows_seven_days() {
        let now = at(2026, 8, 30, 12, 0, 0);
        let windows = ChartFilter::SevenDays.windows_at(now);

        assert_eq!(windows.current.start, at(2026, 8, 23, 12, 0, 0));
        assert_eq!(windows.current.end, now);
        assert_eq!(windows.previous.start, at(2026, 8, 16, 12, 0, 0));
        // Previous window ends exactly where the current one starts.
        assert_eq!(windows.previous.end, windows.current.start);
        assert_eq!(windows.current.end_bound, EndBound::Exclusive);
    }

    #[test]
    fn test_chart_windows_three_months() {
        let now = at(2026, 8, 30, 12, 0, 0);
        let windows = ChartFilter::ThreeMonths.windows_at(now);

        assert_eq!(windows.current.start, at(2026, 5, 30, 12, 0, 0));
        assert_eq!(windows.previous.start, at(2026, 2, 28, 12, 0, 0));
        assert_eq!(windows.previous.end, windows.current.start);
    }

    #[test]
    fn test_chart_windows_default_month() {
        let now = at(2026, 8, 30, 12, 0, 0);
        let windows = ChartFilter::CurrentMonth.windows_at(now);

        assert_eq!(windows.current.start, at(2026, 8, 1, 0, 0, 0));
        assert_eq!(windows.previous.start, at(2026, 7, 1, 0, 0, 0));
        assert_eq!(windows.previous.end, at(2026, 8, 1, 0, 0, 0));

        // Half-open previous window: the month boundary itself belongs to
        // the current window only.
        assert!(!windows.previous.contains(at(2026, 8, 1, 0, 0, 0)));
        assert!(windows.current.contains(at(2026, 8, 1, 0, 0, 0)));
    }
}
