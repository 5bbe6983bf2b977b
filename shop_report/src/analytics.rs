//! Where session counts come from. The store has no analytics integration yet, so the only source is a fixed
//! number supplied through configuration.

use chrono::NaiveDate;
use log::*;

pub const DEFAULT_SESSION_COUNT: u64 = 1000;

#[allow(async_fn_in_trait)]
pub trait SessionSource {
    /// Number of storefront sessions on `date`.
    async fn sessions_for(&self, date: NaiveDate) -> u64;
}

#[derive(Debug, Clone, Copy)]
pub struct StaticSessions(pub u64);

impl Default for StaticSessions {
    fn default() -> Self {
        Self(DEFAULT_SESSION_COUNT)
    }
}

impl SessionSource for StaticSessions {
    async fn sessions_for(&self, date: NaiveDate) -> u64 {
        trace!("Using static session count of {} for {date}", self.0);
        self.0
    }
}
