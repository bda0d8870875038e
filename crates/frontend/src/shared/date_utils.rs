//! Calendar helpers for the dashboard filters
//!
//! Wire dates use the ISO format `YYYY-MM-DD`. All window math is done on
//! the UTC calendar date, so a "last N days" filter means the same thing
//! regardless of the viewer's timezone.

use chrono::{Days, NaiveDate, Utc};

/// Today's UTC calendar date.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Format a date in the wire format `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Window covering the last `days` days up to `today`:
/// `(today - days, today)`, both ISO formatted.
///
/// Returns `None` when the window start would fall outside the calendar
/// range `NaiveDate` supports.
pub fn day_window(today: NaiveDate, days: u32) -> Option<(String, String)> {
    let start = today.checked_sub_days(Days::new(u64::from(days)))?;
    Some((to_iso(start), to_iso(today)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(
            day_window(today, 7),
            Some(("2024-03-08".to_string(), "2024-03-15".to_string()))
        );
    }

    #[test]
    fn test_day_window_crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day_window(today, 30).unwrap().0, "2024-02-04");
    }

    #[test]
    fn test_day_window_out_of_calendar_range_is_none() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(day_window(today, u32::MAX), None);
    }

    #[test]
    fn test_to_iso_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(to_iso(date), "2024-01-02");
    }
}
