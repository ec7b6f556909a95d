use serde::{Deserialize, Serialize};
use time::{Month, OffsetDateTime};

use super::UserRef;

/// The three leave categories the backend accepts. Wire strings keep the
/// human-readable labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "Sick Leave")]
    Sick,
    Vacation,
    #[serde(rename = "Unpaid Leave")]
    Unpaid,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Sick, LeaveType::Vacation, LeaveType::Unpaid];

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick Leave",
            LeaveType::Vacation => "Vacation",
            LeaveType::Unpaid => "Unpaid Leave",
        }
    }
}

/// Review state of a leave request. Anything else on the wire is a parse
/// error, not a fourth state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user: UserRef,
    pub leave_type: LeaveType,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date: OffsetDateTime,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl LeaveRequest {
    /// Calendar days covered, inclusive of both ends.
    pub fn days(&self) -> i64 {
        (self.end_date.date() - self.start_date.date()).whole_days() + 1
    }

    pub fn is_in_month(&self, year: i32, month: Month) -> bool {
        self.start_date.year() == year && self.start_date.month() == month
    }
}

/// Leave requests bucketed by review state. The three buckets partition
/// the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeaveCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveCounts {
    pub fn total(&self) -> usize {
        self.pending + self.approved + self.rejected
    }
}

pub fn count_by_status(leaves: &[LeaveRequest]) -> LeaveCounts {
    let mut counts = LeaveCounts::default();
    for leave in leaves {
        match leave.status {
            LeaveStatus::Pending => counts.pending += 1,
            LeaveStatus::Approved => counts.approved += 1,
            LeaveStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

/// How many requests fall on each leave type, in `LeaveType::ALL` order.
pub fn count_by_type(leaves: &[LeaveRequest]) -> [(LeaveType, usize); 3] {
    LeaveType::ALL.map(|t| (t, leaves.iter().filter(|l| l.leave_type == t).count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use time::macros::datetime;

    fn leave(status: LeaveStatus, leave_type: LeaveType) -> LeaveRequest {
        LeaveRequest {
            id: "l1".to_string(),
            user: UserRef {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                role: Some(Role::Employee),
            },
            leave_type,
            start_date: datetime!(2024-03-04 00:00 UTC),
            end_date: datetime!(2024-03-06 00:00 UTC),
            reason: "family visit".to_string(),
            status,
            created_at: datetime!(2024-03-01 10:00 UTC),
        }
    }

    #[test]
    fn test_counts_partition_input() {
        let leaves = vec![
            leave(LeaveStatus::Pending, LeaveType::Vacation),
            leave(LeaveStatus::Pending, LeaveType::Sick),
            leave(LeaveStatus::Approved, LeaveType::Vacation),
            leave(LeaveStatus::Rejected, LeaveType::Unpaid),
        ];

        let counts = count_by_status(&leaves);
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.total(), leaves.len());
    }

    #[test]
    fn test_empty_counts() {
        let counts = count_by_status(&[]);
        assert_eq!(counts, LeaveCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_days_is_inclusive() {
        let l = leave(LeaveStatus::Pending, LeaveType::Vacation);
        assert_eq!(l.days(), 3);
    }

    #[test]
    fn test_count_by_type() {
        let leaves = vec![
            leave(LeaveStatus::Pending, LeaveType::Sick),
            leave(LeaveStatus::Approved, LeaveType::Sick),
            leave(LeaveStatus::Pending, LeaveType::Unpaid),
        ];
        let by_type = count_by_type(&leaves);
        assert_eq!(by_type[0], (LeaveType::Sick, 2));
        assert_eq!(by_type[1], (LeaveType::Vacation, 0));
        assert_eq!(by_type[2], (LeaveType::Unpaid, 1));
    }

    #[test]
    fn test_unknown_status_is_rejected_at_parse() {
        let json = r#"{"_id":"l9","userId":{"_id":"u1","name":"T"},
            "leaveType":"Vacation","startDate":"2024-03-04T00:00:00Z",
            "endDate":"2024-03-05T00:00:00Z","reason":"x",
            "status":"Maybe","createdAt":"2024-03-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<LeaveRequest>(json).is_err());
    }
}
