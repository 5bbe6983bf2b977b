//! Picks the calendar days a report compares.

use chrono::{Datelike, Days, NaiveDate};

/// The three days of a report, in row order: the reference day, the day before it, and the same day of the
/// previous month.
pub fn report_dates(reference: NaiveDate) -> [NaiveDate; 3] {
    let yesterday = reference.checked_sub_days(Days::new(1)).unwrap_or(reference);
    [reference, yesterday, same_day_previous_month(reference)]
}

/// The same day-of-month in the previous calendar month. If that month is too short, the last day of it is used
/// instead (e.g. 31 March -> 28 or 29 February).
pub fn same_day_previous_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = match date.month() {
        1 => (date.year() - 1, 12),
        m => (date.year(), m - 1),
    };
    // No month is shorter than 28 days, so this walks back at most three times.
    (1..=date.day())
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .unwrap_or(date)
}

/// The tab title used for the reference day.
pub fn sheet_title(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
