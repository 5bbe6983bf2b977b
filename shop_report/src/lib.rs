//! # Shop report
//! A single-shot batch job that compares a shop's order metrics for today, yesterday and the same day last month.
//!
//! 1. Orders for each day are fetched from the Shopify Admin REST API.
//! 2. Each day is reduced to a [`metrics::DaySnapshot`], and every snapshot is compared with the one before it.
//! 3. The resulting table replaces the contents of a Google Sheets tab named after today's date.
//! 4. A message pointing at the sheet is posted to Slack. This step is best-effort.
//!
//! ## Configuration
//! The job is configured via environment variables. See [config](config/index.html) for more information.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod dates;
pub mod errors;
pub mod integrations;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod table;
pub mod traits;
