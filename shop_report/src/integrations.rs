//! Binds the API clients to the report's seams.

use sheets_tools::{SheetsApi, SheetsApiError};
use shopify_tools::{OrderWindow, ShopifyApi, ShopifyApiError, ShopifyOrder};
use slack_tools::{SlackApi, SlackApiError};

use crate::{
    table::SheetTable,
    traits::{Notifier, OrderSource, ReportSink},
};

impl OrderSource for ShopifyApi {
    async fn fetch_orders(&self, window: &OrderWindow) -> Result<Vec<ShopifyOrder>, ShopifyApiError> {
        ShopifyApi::fetch_orders(self, window).await
    }
}

impl ReportSink for SheetsApi {
    async fn publish(&self, title: &str, table: &SheetTable) -> Result<u64, SheetsApiError> {
        self.write_table(title, table.rows.clone()).await
    }
}

impl Notifier for SlackApi {
    async fn notify(&self, message: &str) -> Result<(), SlackApiError> {
        match self.config().attachment.clone() {
            Some(path) => self.upload_file(&path, message).await.map(|_| ()),
            None => self.post_message(message).await.map(|_| ()),
        }
    }
}
