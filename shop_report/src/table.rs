use serde_json::{json, Value};

use crate::metrics::{DiffRow, PercentChange};

pub const HEADER: [&str; 11] = [
    "Date",
    "Total Orders",
    "Total Orders % Diff",
    "Total Revenue",
    "Total Revenue % Diff",
    "Total Sessions",
    "Total Sessions % Diff",
    "Conversion Rate",
    "Conversion Rate % Diff",
    "Average Order Value",
    "AOV % Diff",
];

/// The complete contents of one report tab: the header followed by one row per day.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub rows: Vec<Vec<Value>>,
}

impl SheetTable {
    pub fn new(rows: &[DiffRow]) -> Self {
        let header: Vec<Value> = HEADER.iter().map(|h| Value::from(*h)).collect();
        let rows = std::iter::once(header).chain(rows.iter().map(row_cells)).collect();
        Self { rows }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

fn percent_cell(change: PercentChange) -> Value {
    match change {
        PercentChange::NotApplicable => Value::from("N/A"),
        PercentChange::Percent(p) => json!(p),
    }
}

fn row_cells(row: &DiffRow) -> Vec<Value> {
    let s = &row.snapshot;
    vec![
        Value::from(s.date.format("%Y-%m-%d").to_string()),
        json!(s.total_orders),
        percent_cell(row.orders_diff),
        json!(s.revenue_value()),
        percent_cell(row.revenue_diff),
        json!(s.total_sessions),
        percent_cell(row.sessions_diff),
        json!(s.conversion_rate),
        percent_cell(row.conversion_rate_diff),
        json!(s.average_order_value),
        percent_cell(row.aov_diff),
    ]
}
