use std::fmt::Display;

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};

/// A half-open creation-time window `[start, end)` used to scope an order query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderWindow {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl OrderWindow {
    /// The calendar day `date`, from midnight to the following midnight, in the given UTC offset.
    pub fn for_day(date: NaiveDate, offset: FixedOffset) -> Self {
        let start = midnight(date, offset);
        let next = date.checked_add_days(Days::new(1)).unwrap_or(date);
        let end = midnight(next, offset);
        Self { start, end }
    }

    pub fn created_at_min(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    pub fn created_at_max(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

impl Display for OrderWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.created_at_min(), self.created_at_max())
    }
}

fn midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    // A fixed offset has no gaps, so local midnight always maps to exactly one instant.
    date.and_time(NaiveTime::MIN).and_local_timezone(offset).single().unwrap_or_else(|| {
        let utc = date.and_time(NaiveTime::MIN).and_utc();
        utc.with_timezone(&offset)
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn day_window_bounds() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let window = OrderWindow::for_day(date, offset);
        assert_eq!(window.created_at_min(), "2024-02-29T00:00:00+02:00");
        assert_eq!(window.created_at_max(), "2024-03-01T00:00:00+02:00");
        assert_eq!(window.to_string(), "[2024-02-29T00:00:00+02:00, 2024-03-01T00:00:00+02:00)");
    }

    #[test]
    fn utc_window_crosses_year_end() {
        let utc = FixedOffset::east_opt(0).unwrap();
        let window = OrderWindow::for_day(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(), utc);
        assert_eq!(window.created_at_min(), "2023-12-31T00:00:00+00:00");
        assert_eq!(window.created_at_max(), "2024-01-01T00:00:00+00:00");
    }
}
