use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::UserRef;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayrollStatus {
    #[default]
    Pending,
    Processed,
    Paid,
}

impl PayrollStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PayrollStatus::Pending => "Pending",
            PayrollStatus::Processed => "Processed",
            PayrollStatus::Paid => "Paid",
        }
    }
}

/// One generated payroll line. Entries sharing a `month` form a batch; the
/// backend returns them newest batch first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user: UserRef,
    /// `YYYY-MM` month key.
    pub month: String,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default)]
    pub unpaid_leave_days: u32,
    #[serde(default)]
    pub deductions: f64,
    pub total_pay: f64,
    #[serde(default)]
    pub status: PayrollStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Rollup of the most recent payroll batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub month: String,
    pub entries: usize,
    pub total_amount: f64,
    pub processed_on: OffsetDateTime,
}

/// Sum of `total_pay` across every entry ever generated.
pub fn grand_total(entries: &[PayrollEntry]) -> f64 {
    entries.iter().map(|e| e.total_pay).sum()
}

/// Summary of the latest batch, or `None` when no payroll has been
/// generated yet. An empty history is a distinct signal from a batch that
/// happens to sum to zero.
pub fn batch_summary(entries: &[PayrollEntry]) -> Option<BatchSummary> {
    let latest = entries.first()?;
    let month = latest.month.clone();

    let batch: Vec<&PayrollEntry> = entries.iter().filter(|e| e.month == month).collect();
    let total_amount = batch.iter().map(|e| e.total_pay).sum();

    Some(BatchSummary {
        month,
        entries: batch.len(),
        total_amount,
        processed_on: latest.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use time::macros::datetime;

    fn entry(month: &str, total_pay: f64, created_at: OffsetDateTime) -> PayrollEntry {
        PayrollEntry {
            id: format!("p-{month}-{total_pay}"),
            user: UserRef {
                id: "u1".to_string(),
                name: "Test User".to_string(),
                role: Some(Role::Employee),
            },
            month: month.to_string(),
            total_hours: 160.0,
            overtime_hours: 0.0,
            unpaid_leave_days: 0,
            deductions: 0.0,
            total_pay,
            status: PayrollStatus::Processed,
            created_at,
        }
    }

    #[test]
    fn test_no_batches_is_none_not_zero() {
        assert_eq!(batch_summary(&[]), None);

        let zeroed = vec![entry("2024-02", 0.0, datetime!(2024-03-01 06:00 UTC))];
        let summary = batch_summary(&zeroed).unwrap();
        assert_eq!(summary.total_amount, 0.0);
        // A real batch with zero total is still a batch.
        assert_ne!(batch_summary(&zeroed), None);
    }

    #[test]
    fn test_latest_batch_only() {
        let entries = vec![
            entry("2024-03", 3000.0, datetime!(2024-04-01 06:00 UTC)),
            entry("2024-03", 2500.0, datetime!(2024-04-01 06:00 UTC)),
            entry("2024-02", 2800.0, datetime!(2024-03-01 06:00 UTC)),
        ];

        let summary = batch_summary(&entries).unwrap();
        assert_eq!(summary.month, "2024-03");
        assert_eq!(summary.entries, 2);
        assert_eq!(summary.total_amount, 5500.0);
        assert_eq!(summary.processed_on, datetime!(2024-04-01 06:00 UTC));
    }

    #[test]
    fn test_grand_total_spans_all_batches() {
        let entries = vec![
            entry("2024-03", 3000.0, datetime!(2024-04-01 06:00 UTC)),
            entry("2024-02", 2800.0, datetime!(2024-03-01 06:00 UTC)),
        ];
        assert_eq!(grand_total(&entries), 5800.0);
        assert_eq!(grand_total(&[]), 0.0);
    }
}
