use hrtrack::domain::AttendanceRecord;
use time::{Date, OffsetDateTime, UtcOffset};

pub fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    dt.to_offset(local_offset)
}

/// Clock stamps that never happened render as a plain dash.
pub fn format_clock_time(ts: Option<OffsetDateTime>) -> String {
    match ts {
        Some(ts) => {
            let local = to_local_time(ts);
            format!("{:02}:{:02}", local.hour(), local.minute())
        }
        None => "-".to_string(),
    }
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

pub fn format_hours(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    format!("{:02}h:{:02}m", total_minutes / 60, total_minutes % 60)
}

pub fn presence_label(record: &AttendanceRecord) -> &'static str {
    if record.clock_out.is_some() {
        "Present"
    } else if record.clock_in.is_some() {
        "In progress"
    } else {
        "Absent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrtrack::domain::UserRef;
    use time::macros::datetime;

    fn record(
        clock_in: Option<OffsetDateTime>,
        clock_out: Option<OffsetDateTime>,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: "a1".to_string(),
            user: UserRef {
                id: "u1".to_string(),
                name: "Test".to_string(),
                role: None,
            },
            date: datetime!(2024-02-05 00:00 UTC),
            clock_in,
            clock_out,
            breaks: Vec::new(),
            total_hours: 0.0,
            approval: Default::default(),
        }
    }

    #[test]
    fn test_absent_timestamp_renders_dash() {
        assert_eq!(format_clock_time(None), "-");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        assert_eq!(format_hours(7.5), format_hours(7.5));
        assert_eq!(format_clock_time(None), format_clock_time(None));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "00h:00m");
        assert_eq!(format_hours(7.5), "07h:30m");
        assert_eq!(format_hours(8.25), "08h:15m");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(time::macros::date!(2024 - 02 - 05)), "2024-02-05");
    }

    #[test]
    fn test_presence_labels() {
        let done = record(
            Some(datetime!(2024-02-05 09:00 UTC)),
            Some(datetime!(2024-02-05 17:00 UTC)),
        );
        let open = record(Some(datetime!(2024-02-05 09:00 UTC)), None);
        let absent = record(None, None);

        assert_eq!(presence_label(&done), "Present");
        assert_eq!(presence_label(&open), "In progress");
        assert_eq!(presence_label(&absent), "Absent");
    }
}
