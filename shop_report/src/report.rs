use chrono::{DateTime, FixedOffset, NaiveDate};
use log::*;
use shopify_tools::OrderWindow;

use crate::{
    analytics::SessionSource,
    dates::{report_dates, sheet_title},
    errors::ReportError,
    metrics::{build_rows, DaySnapshot, DiffRow},
    table::SheetTable,
    traits::{Notifier, OrderSource, ReportSink},
};

/// Whether the best-effort completion message reached the chat channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Sent,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub sheet_title: String,
    pub rows: Vec<DiffRow>,
    pub cells_updated: u64,
    pub notification: NotificationOutcome,
}

pub fn completion_message(sheet_url: &str) -> String {
    format!("Shopify data has been updated. Check the Google Sheet: {sheet_url}")
}

pub struct DailyReport<O, S, R, N> {
    orders: O,
    sessions: S,
    sink: R,
    notifier: N,
    sheet_url: String,
}

impl<O, S, R, N> DailyReport<O, S, R, N>
where
    O: OrderSource,
    S: SessionSource,
    R: ReportSink,
    N: Notifier,
{
    pub fn new(orders: O, sessions: S, sink: R, notifier: N, sheet_url: String) -> Self {
        Self { orders, sessions, sink, notifier, sheet_url }
    }

    /// Fetches and aggregates each day in turn. Days are queried one after the other, never concurrently.
    pub async fn collect_snapshots(
        &self,
        dates: &[NaiveDate],
        offset: FixedOffset,
    ) -> Result<Vec<DaySnapshot>, ReportError> {
        let mut snapshots = Vec::with_capacity(dates.len());
        for &date in dates {
            let window = OrderWindow::for_day(date, offset);
            let orders = self.orders.fetch_orders(&window).await?;
            let sessions = self.sessions.sessions_for(date).await;
            let snapshot = DaySnapshot::aggregate(date, &orders, sessions)?;
            debug!(
                "📊️ {date}: {} orders, {} revenue, {sessions} sessions",
                snapshot.total_orders, snapshot.total_revenue
            );
            snapshots.push(snapshot);
        }
        Ok(snapshots)
    }

    /// Runs the full report for the day containing `reference`.
    ///
    /// Failing to fetch orders or to write the sheet aborts the run. A failed notification is logged and recorded in
    /// the summary, but the run still succeeds.
    pub async fn run(&self, reference: DateTime<FixedOffset>) -> Result<RunSummary, ReportError> {
        let today = reference.date_naive();
        let dates = report_dates(today);
        info!("📊️ Building report for {}", dates.map(|d| d.to_string()).join(", "));
        let snapshots = self.collect_snapshots(&dates, *reference.offset()).await?;
        let rows = build_rows(&snapshots);
        let table = SheetTable::new(&rows);

        let title = sheet_title(today);
        let cells_updated = self.sink.publish(&title, &table).await?;
        info!("📊️ Report written to tab '{title}'");

        let notification = self.notify(&completion_message(&self.sheet_url)).await;
        Ok(RunSummary { sheet_title: title, rows, cells_updated, notification })
    }

    async fn notify(&self, message: &str) -> NotificationOutcome {
        match self.notifier.notify(message).await {
            Ok(()) => {
                info!("📣️ Notification sent");
                NotificationOutcome::Sent
            },
            Err(e) => {
                error!("📣️ Error sending message: {e}");
                NotificationOutcome::Failed(e.to_string())
            },
        }
    }
}
