use serde::{Deserialize, Serialize};
use time::{Date, Month};

use super::UserRef;

/// Per-employee row of the monthly attendance report, as computed by the
/// backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummaryRow {
    pub user: UserRef,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub present_days: u32,
    #[serde(default)]
    pub pending_days: u32,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub attendance_rate: f64,
}

/// `YYYY-MM` key for the given date's month.
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), date.month() as u8)
}

/// Parses a `YYYY-MM` key. Returns `None` for anything that is not a
/// four-digit year, a dash and a month 01-12.
pub fn parse_month_key(key: &str) -> Option<(i32, Month)> {
    let (year, month) = key.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let month = Month::try_from(month).ok()?;
    Some((year, month))
}

/// The month before the given one, stepping the year when needed.
pub fn previous_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::January => (year - 1, Month::December),
        _ => (year, month.previous()),
    }
}

/// The month after the given one, stepping the year when needed.
pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    match month {
        Month::December => (year + 1, Month::January),
        _ => (year, month.next()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_format() {
        let date = Date::from_calendar_date(2024, Month::March, 15).unwrap();
        assert_eq!(month_key(date), "2024-03");
    }

    #[test]
    fn test_parse_month_key() {
        assert_eq!(parse_month_key("2024-02"), Some((2024, Month::February)));
        assert_eq!(parse_month_key("2024-13"), None);
        assert_eq!(parse_month_key("2024-2"), None);
        assert_eq!(parse_month_key("24-02"), None);
        assert_eq!(parse_month_key("banana"), None);
    }

    #[test]
    fn test_month_stepping_wraps_years() {
        assert_eq!(previous_month(2024, Month::January), (2023, Month::December));
        assert_eq!(next_month(2024, Month::December), (2025, Month::January));
        assert_eq!(next_month(2024, Month::May), (2024, Month::June));
    }
}
