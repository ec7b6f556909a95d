use serde::Serialize;

use crate::domain::{LeaveStatus, LeaveType, Role};

/// Body of `POST leave/request`. Dates travel as `YYYY-MM-DD` strings,
/// pre-validated by the caller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct SetStatus {
    pub status: LeaveStatus,
}

#[derive(Debug, Serialize)]
pub struct SetMonth<'a> {
    pub month: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

/// Partial update for `PATCH employee/update/:id`; unset fields are left
/// untouched server-side.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_request_wire_format() {
        let body = NewLeaveRequest {
            leave_type: LeaveType::Sick,
            start_date: "2024-03-04".to_string(),
            end_date: "2024-03-05".to_string(),
            reason: "flu".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["leaveType"], "Sick Leave");
        assert_eq!(json["startDate"], "2024-03-04");
    }

    #[test]
    fn test_update_employee_skips_unset_fields() {
        let update = UpdateEmployee {
            position: Some("Lead Developer".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"position":"Lead Developer"}"#);
    }
}
