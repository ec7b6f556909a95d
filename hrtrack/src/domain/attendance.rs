use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, Month, OffsetDateTime, Weekday};

use super::Role;

/// Populated user reference as it appears on attendance, leave and payroll
/// rows. `role` is only present when the backend populates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// One break within a workday. `break_out` marks leaving for the break,
/// `break_in` marks coming back; an open break has no `break_in` yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakPeriod {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub break_out: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub break_in: Option<OffsetDateTime>,
}

/// Manager sign-off state of a workday record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// One employee-day of attendance. Timestamps that have not happened yet
/// are `None`, never empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user: UserRef,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub clock_in: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub clock_out: Option<OffsetDateTime>,
    #[serde(default)]
    pub breaks: Vec<BreakPeriod>,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(rename = "status", default)]
    pub approval: ApprovalStatus,
}

impl AttendanceRecord {
    pub fn is_on(&self, day: Date) -> bool {
        self.date.date() == day
    }

    pub fn is_present(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_some()
    }

    pub fn is_in_month(&self, year: i32, month: Month) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

/// Presence state derived from the current day's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    ClockedIn,
    OnBreak,
    ClockedOut,
    Idle,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::ClockedIn => "Clocked in",
            AttendanceStatus::OnBreak => "On break",
            AttendanceStatus::ClockedOut => "Clocked out",
            AttendanceStatus::Idle => "Not clocked in",
        }
    }

    pub fn can_clock_in(&self) -> bool {
        matches!(self, AttendanceStatus::Idle)
    }

    pub fn can_clock_out(&self) -> bool {
        matches!(self, AttendanceStatus::ClockedIn)
    }

    pub fn can_start_break(&self) -> bool {
        matches!(self, AttendanceStatus::ClockedIn)
    }

    pub fn can_end_break(&self) -> bool {
        matches!(self, AttendanceStatus::OnBreak)
    }
}

/// Derives the presence state from today's record, if any.
///
/// Precedence, top-down:
/// 1. no record: `Idle`
/// 2. `clock_out` set: `ClockedOut`, regardless of open breaks
/// 3. last break not yet ended: `OnBreak`
/// 4. `clock_in` set: `ClockedIn`
/// 5. otherwise `Idle`
pub fn derive_status(today_record: Option<&AttendanceRecord>) -> AttendanceStatus {
    let Some(record) = today_record else {
        return AttendanceStatus::Idle;
    };

    if record.clock_out.is_some() {
        return AttendanceStatus::ClockedOut;
    }

    if let Some(last_break) = record.breaks.last() {
        if last_break.break_in.is_none() {
            return AttendanceStatus::OnBreak;
        }
    }

    if record.clock_in.is_some() {
        AttendanceStatus::ClockedIn
    } else {
        AttendanceStatus::Idle
    }
}

/// Sum of recorded hours for records on `today`.
pub fn todays_hours(records: &[AttendanceRecord], today: Date) -> f64 {
    records
        .iter()
        .filter(|r| r.is_on(today))
        .map(|r| r.total_hours)
        .sum()
}

/// Number of weekdays (Mon-Fri) in the given month.
pub fn workdays_in_month(year: i32, month: Month) -> u32 {
    let mut count = 0;
    let mut day = 1;
    while let Ok(date) = Date::from_calendar_date(year, month, day) {
        if !matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday) {
            count += 1;
        }
        day += 1;
    }
    count
}

/// Records in the month with both clock stamps set.
pub fn present_days(records: &[AttendanceRecord], year: i32, month: Month) -> u32 {
    records
        .iter()
        .filter(|r| r.is_in_month(year, month) && r.is_present())
        .count() as u32
}

/// Present days as a percentage of the month's workdays, rounded to the
/// nearest whole percent and clamped to 0..=100. A month without workdays
/// rates 0.
pub fn attendance_rate(records: &[AttendanceRecord], year: i32, month: Month) -> u8 {
    let workdays = workdays_in_month(year, month);
    if workdays == 0 {
        return 0;
    }

    let present = present_days(records, year, month);
    let rate = (present as f64 / workdays as f64 * 100.0).round();
    rate.clamp(0.0, 100.0) as u8
}

/// Records on `today` that have clocked in but not yet out.
pub fn in_progress_today(records: &[AttendanceRecord], today: Date) -> usize {
    records
        .iter()
        .filter(|r| r.is_on(today) && r.clock_in.is_some() && r.clock_out.is_none())
        .count()
}

/// Completed (both stamps set) records within the month, across all users.
pub fn completed_in_month(records: &[AttendanceRecord], year: i32, month: Month) -> usize {
    records
        .iter()
        .filter(|r| r.is_in_month(year, month) && r.is_present())
        .count()
}

/// Per-employee attendance rollup for manager and report views.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeTotals {
    pub user_id: String,
    pub name: String,
    pub total_days: u32,
    pub present_days: u32,
    pub pending_days: u32,
    pub total_hours: f64,
}

/// Groups records by employee and sums them up, sorted by employee name.
pub fn employee_totals(records: &[AttendanceRecord]) -> Vec<EmployeeTotals> {
    let mut by_user: HashMap<&str, EmployeeTotals> = HashMap::new();

    for record in records {
        let entry = by_user
            .entry(record.user.id.as_str())
            .or_insert_with(|| EmployeeTotals {
                user_id: record.user.id.clone(),
                name: record.user.name.clone(),
                total_days: 0,
                present_days: 0,
                pending_days: 0,
                total_hours: 0.0,
            });

        entry.total_days += 1;
        if record.is_present() {
            entry.present_days += 1;
        }
        if record.approval == ApprovalStatus::Pending {
            entry.pending_days += 1;
        }
        entry.total_hours += record.total_hours;
    }

    let mut totals: Vec<EmployeeTotals> = by_user.into_values().collect();
    totals.sort_by(|a, b| a.name.cmp(&b.name));
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record(clock_in: bool, clock_out: bool, breaks: Vec<BreakPeriod>) -> AttendanceRecord {
        AttendanceRecord {
            id: "a1".to_string(),
            user: UserRef {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                role: Some(Role::Employee),
            },
            date: datetime!(2024-02-05 00:00 UTC),
            clock_in: clock_in.then_some(datetime!(2024-02-05 09:00 UTC)),
            clock_out: clock_out.then_some(datetime!(2024-02-05 17:00 UTC)),
            breaks,
            total_hours: 8.0,
            approval: ApprovalStatus::Pending,
        }
    }

    fn open_break() -> BreakPeriod {
        BreakPeriod {
            break_out: Some(datetime!(2024-02-05 12:00 UTC)),
            break_in: None,
        }
    }

    fn closed_break() -> BreakPeriod {
        BreakPeriod {
            break_out: Some(datetime!(2024-02-05 12:00 UTC)),
            break_in: Some(datetime!(2024-02-05 12:30 UTC)),
        }
    }

    #[test]
    fn test_no_record_is_idle() {
        assert_eq!(derive_status(None), AttendanceStatus::Idle);
    }

    #[test]
    fn test_clock_out_wins_over_open_break() {
        let r = record(true, true, vec![open_break()]);
        assert_eq!(derive_status(Some(&r)), AttendanceStatus::ClockedOut);
    }

    #[test]
    fn test_open_last_break_is_on_break() {
        let r = record(true, false, vec![closed_break(), open_break()]);
        assert_eq!(derive_status(Some(&r)), AttendanceStatus::OnBreak);
    }

    #[test]
    fn test_closed_breaks_fall_through_to_clocked_in() {
        let r = record(true, false, vec![closed_break()]);
        assert_eq!(derive_status(Some(&r)), AttendanceStatus::ClockedIn);
    }

    #[test]
    fn test_record_without_stamps_is_idle() {
        let r = record(false, false, vec![]);
        assert_eq!(derive_status(Some(&r)), AttendanceStatus::Idle);
    }

    #[test]
    fn test_action_availability_follows_status() {
        assert!(AttendanceStatus::Idle.can_clock_in());
        assert!(!AttendanceStatus::ClockedOut.can_clock_in());
        assert!(AttendanceStatus::ClockedIn.can_clock_out());
        assert!(AttendanceStatus::ClockedIn.can_start_break());
        assert!(AttendanceStatus::OnBreak.can_end_break());
        assert!(!AttendanceStatus::OnBreak.can_clock_out());
    }

    #[test]
    fn test_workdays_feb_2024() {
        // 29 days, of which 8 fall on weekends.
        assert_eq!(workdays_in_month(2024, Month::February), 21);
    }

    #[test]
    fn test_workdays_other_months() {
        assert_eq!(workdays_in_month(2024, Month::January), 23);
        assert_eq!(workdays_in_month(2023, Month::February), 20);
    }

    #[test]
    fn test_todays_hours_only_counts_today() {
        let mut yesterday = record(true, true, vec![]);
        yesterday.date = datetime!(2024-02-04 00:00 UTC);
        yesterday.total_hours = 6.0;
        let today = record(true, true, vec![]);

        let total = todays_hours(&[yesterday, today], Date::from_calendar_date(2024, Month::February, 5).unwrap());
        assert_eq!(total, 8.0);
    }

    #[test]
    fn test_attendance_rate_rounds() {
        // 1 present day of 21 workdays is 4.76..%, rounds to 5.
        let r = record(true, true, vec![]);
        assert_eq!(attendance_rate(&[r], 2024, Month::February), 5);
    }

    #[test]
    fn test_attendance_rate_monotonic_in_present_days() {
        let mut records = Vec::new();
        let mut last_rate = 0;
        for day in 1..=21u8 {
            let mut r = record(true, true, vec![]);
            r.date = Date::from_calendar_date(2024, Month::February, day)
                .unwrap()
                .midnight()
                .assume_utc();
            records.push(r);

            let rate = attendance_rate(&records, 2024, Month::February);
            assert!(rate >= last_rate);
            last_rate = rate;
        }
        assert_eq!(last_rate, 100);
    }

    #[test]
    fn test_attendance_rate_ignores_other_months() {
        let mut r = record(true, true, vec![]);
        r.date = datetime!(2024-01-15 00:00 UTC);
        assert_eq!(attendance_rate(&[r], 2024, Month::February), 0);
    }

    #[test]
    fn test_in_progress_and_completed() {
        let today = Date::from_calendar_date(2024, Month::February, 5).unwrap();
        let in_progress = record(true, false, vec![]);
        let done = record(true, true, vec![]);
        let records = vec![in_progress, done];

        assert_eq!(in_progress_today(&records, today), 1);
        assert_eq!(completed_in_month(&records, 2024, Month::February), 1);
    }

    #[test]
    fn test_employee_totals_groups_by_user() {
        let mut a = record(true, true, vec![]);
        let mut b = record(true, false, vec![]);
        b.approval = ApprovalStatus::Approved;
        let mut c = record(true, true, vec![]);
        c.user.id = "u2".to_string();
        c.user.name = "Another User".to_string();
        c.total_hours = 4.0;
        a.total_hours = 8.0;
        b.total_hours = 2.0;

        let totals = employee_totals(&[a, b, c]);
        assert_eq!(totals.len(), 2);
        // Sorted by name.
        assert_eq!(totals[0].name, "Another User");
        assert_eq!(totals[0].total_hours, 4.0);
        assert_eq!(totals[1].total_days, 2);
        assert_eq!(totals[1].present_days, 1);
        assert_eq!(totals[1].pending_days, 1);
        assert_eq!(totals[1].total_hours, 10.0);
    }
}
