use std::fmt::Display;

use chrono::NaiveDate;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::Serialize;
use shopify_tools::{ShopifyApiError, ShopifyOrder};

//--------------------------------------     DaySnapshot     ---------------------------------------------------------
/// Aggregated order metrics for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub total_orders: u64,
    /// Exact sum of the order totals, in the shop currency.
    pub total_revenue: Decimal,
    pub total_sessions: u64,
    /// Orders per session. Zero when there were no sessions.
    pub conversion_rate: f64,
    /// Revenue per order, in currency units. Zero when there were no orders.
    pub average_order_value: f64,
}

impl DaySnapshot {
    pub fn aggregate(date: NaiveDate, orders: &[ShopifyOrder], total_sessions: u64) -> Result<Self, ShopifyApiError> {
        let total_revenue = orders.iter().map(ShopifyOrder::total_price_amount).sum::<Result<Decimal, _>>()?;
        Ok(Self::from_totals(date, orders.len() as u64, total_revenue, total_sessions))
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn from_totals(date: NaiveDate, total_orders: u64, total_revenue: Decimal, total_sessions: u64) -> Self {
        let conversion_rate = if total_sessions == 0 { 0.0 } else { total_orders as f64 / total_sessions as f64 };
        let average_order_value = if total_orders == 0 {
            0.0
        } else {
            (total_revenue / Decimal::from(total_orders)).to_f64().unwrap_or_default()
        };
        Self { date, total_orders, total_revenue, total_sessions, conversion_rate, average_order_value }
    }

    /// Revenue as a plain number, for percentages and the sheet.
    pub fn revenue_value(&self) -> f64 {
        self.total_revenue.to_f64().unwrap_or_default()
    }
}

//--------------------------------------    PercentChange    ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PercentChange {
    /// There is nothing to compare against, or the previous value was zero.
    NotApplicable,
    Percent(f64),
}

impl Display for PercentChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotApplicable => f.write_str("N/A"),
            Self::Percent(p) => write!(f, "{p}"),
        }
    }
}

/// `(current - previous) / previous * 100`, or `N/A` when `previous` is exactly zero.
pub fn percent_diff(current: f64, previous: f64) -> PercentChange {
    if previous == 0.0 {
        PercentChange::NotApplicable
    } else {
        PercentChange::Percent((current - previous) / previous * 100.0)
    }
}

//--------------------------------------       DiffRow       ---------------------------------------------------------
/// A snapshot together with its change relative to the snapshot before it in the same report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffRow {
    pub snapshot: DaySnapshot,
    pub orders_diff: PercentChange,
    pub revenue_diff: PercentChange,
    pub sessions_diff: PercentChange,
    pub conversion_rate_diff: PercentChange,
    pub aov_diff: PercentChange,
}

impl DiffRow {
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(current: &DaySnapshot, previous: Option<&DaySnapshot>) -> Self {
        let diff = |metric: fn(&DaySnapshot) -> f64| match previous {
            Some(previous) => percent_diff(metric(current), metric(previous)),
            None => PercentChange::NotApplicable,
        };
        Self {
            snapshot: current.clone(),
            orders_diff: diff(|s| s.total_orders as f64),
            revenue_diff: diff(DaySnapshot::revenue_value),
            sessions_diff: diff(|s| s.total_sessions as f64),
            conversion_rate_diff: diff(|s| s.conversion_rate),
            aov_diff: diff(|s| s.average_order_value),
        }
    }
}

/// Compares every snapshot with the one immediately before it. The first row has nothing to compare against.
pub fn build_rows(snapshots: &[DaySnapshot]) -> Vec<DiffRow> {
    let previous = std::iter::once(None).chain(snapshots.iter().map(Some));
    snapshots.iter().zip(previous).map(|(current, previous)| DiffRow::compare(current, previous)).collect()
}
