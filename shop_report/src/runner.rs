use chrono::Local;
use log::*;
use sheets_tools::SheetsApi;
use shopify_tools::ShopifyApi;
use slack_tools::SlackApi;

use crate::{
    analytics::StaticSessions,
    config::ReportConfig,
    errors::ReportError,
    report::{DailyReport, RunSummary},
};

/// Wires the live API clients together and runs today's report.
pub async fn run_daily_report(config: ReportConfig) -> Result<RunSummary, ReportError> {
    let sheet_url = config.sheets.public_url();
    let shopify = ShopifyApi::new(config.shopify).map_err(|e| ReportError::InitializeError(e.to_string()))?;
    let slack = SlackApi::new(config.slack).map_err(|e| ReportError::InitializeError(e.to_string()))?;
    let sheets = SheetsApi::connect(config.sheets).await?;
    let sessions = StaticSessions(config.session_count);
    let report = DailyReport::new(shopify, sessions, sheets, slack, sheet_url);
    let now = Local::now().fixed_offset();
    info!("🚀️ Starting daily report run at {now}");
    report.run(now).await
}
