use sheets_tools::SheetsApiError;
use shopify_tools::{OrderWindow, ShopifyApiError, ShopifyOrder};
use slack_tools::SlackApiError;

use crate::table::SheetTable;

#[allow(async_fn_in_trait)]
pub trait OrderSource {
    /// All orders created inside `window`.
    async fn fetch_orders(&self, window: &OrderWindow) -> Result<Vec<ShopifyOrder>, ShopifyApiError>;
}

#[allow(async_fn_in_trait)]
pub trait ReportSink {
    /// Replaces the contents of the tab `title` with `table`. Returns the number of cells written.
    async fn publish(&self, title: &str, table: &SheetTable) -> Result<u64, SheetsApiError>;
}

#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn notify(&self, message: &str) -> Result<(), SlackApiError>;
}
