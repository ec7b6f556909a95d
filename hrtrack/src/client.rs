use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use crate::domain::{
    AttendanceRecord, AttendanceSummaryRow, Employee, LeaveRequest, LeaveStatus, PayrollEntry,
};
use crate::dto::{NewEmployee, NewLeaveRequest, SetMonth, SetStatus, UpdateEmployee};
use crate::{HrUrl, Session};

/// Typed client for the HR backend. Every call carries the session's
/// bearer token; 401/403 map to `FetchError::Unauthorized` so callers can
/// drop the session and return to login.
pub struct HrClient {
    http: reqwest::Client,
    base_url: HrUrl,
    session: Session,
}

impl HrClient {
    pub fn new(api_url: &str, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: HrUrl::new(api_url),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> HrUrl {
        self.base_url.append_path(path)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        call_name: &'static str,
    ) -> Result<T, FetchError> {
        let resp = builder
            .header(AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("{} failed to send: {}", call_name, e);
                FetchError::ResponseError(format!("{}: {}", call_name, e))
            })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::error!("{} rejected with {}", call_name, status);
            return Err(FetchError::Unauthorized);
        }

        if !status.is_success() {
            let message = resp
                .json::<ApiMessage>()
                .await
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            tracing::error!("{} returned error: {}", call_name, message);
            return Err(FetchError::ResponseError(format!(
                "{}: {}",
                call_name, message
            )));
        }

        resp.json::<T>().await.map_err(|e| {
            tracing::error!("{} returned malformed body: {}", call_name, e);
            FetchError::ParsingError(format!("{}: {}", call_name, e))
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: HrUrl,
        call_name: &'static str,
    ) -> Result<T, FetchError> {
        self.request(self.http.get(url.as_ref()), call_name).await
    }

    // -- attendance --

    pub async fn my_attendance(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        let resp: RecordsResponse = self
            .get(self.url("attendance/my"), "GET attendance/my")
            .await?;
        Ok(resp.records)
    }

    pub async fn all_attendance(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        let resp: RecordsResponse = self
            .get(self.url("attendance/all"), "GET attendance/all")
            .await?;
        Ok(resp.records)
    }

    pub async fn clock_in(&self) -> Result<String, FetchError> {
        let url = self.url("attendance/clockin");
        let resp: ApiMessage = self
            .request(self.http.post(url.as_ref()), "POST attendance/clockin")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Clocked in".to_string()))
    }

    pub async fn clock_out(&self) -> Result<String, FetchError> {
        let url = self.url("attendance/clockout");
        let resp: ApiMessage = self
            .request(self.http.post(url.as_ref()), "POST attendance/clockout")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Clocked out".to_string()))
    }

    /// Leave for a break (`break-out` on the wire).
    pub async fn start_break(&self) -> Result<String, FetchError> {
        let url = self.url("attendance/break-out");
        let resp: ApiMessage = self
            .request(self.http.post(url.as_ref()), "POST attendance/break-out")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Break started".to_string()))
    }

    /// Return from a break (`break-in` on the wire).
    pub async fn end_break(&self) -> Result<String, FetchError> {
        let url = self.url("attendance/break-in");
        let resp: ApiMessage = self
            .request(self.http.post(url.as_ref()), "POST attendance/break-in")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Break ended".to_string()))
    }

    pub async fn approve_attendance(&self, id: &str) -> Result<String, FetchError> {
        let url = self.url(&format!("attendance/approve/{}", id));
        let resp: ApiMessage = self
            .request(self.http.patch(url.as_ref()), "PATCH attendance/approve")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Timesheet approved".to_string()))
    }

    pub async fn reject_attendance(&self, id: &str) -> Result<String, FetchError> {
        let url = self.url(&format!("attendance/reject/{}", id));
        let resp: ApiMessage = self
            .request(self.http.patch(url.as_ref()), "PATCH attendance/reject")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Timesheet rejected".to_string()))
    }

    // -- leave --

    pub async fn my_leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        let resp: LeavesResponse = self.get(self.url("leave/my"), "GET leave/my").await?;
        Ok(resp.leaves)
    }

    /// The caller's review queue (a manager's team, for instance).
    pub async fn leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        let resp: LeavesResponse = self.get(self.url("leave/"), "GET leave/").await?;
        Ok(resp.leaves)
    }

    pub async fn all_leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        let resp: LeavesResponse = self.get(self.url("leave/all"), "GET leave/all").await?;
        Ok(resp.leaves)
    }

    pub async fn request_leave(&self, request: &NewLeaveRequest) -> Result<String, FetchError> {
        let url = self.url("leave/request");
        let resp: ApiMessage = self
            .request(
                self.http.post(url.as_ref()).json(request),
                "POST leave/request",
            )
            .await?;
        Ok(resp
            .message
            .unwrap_or_else(|| "Leave request submitted".to_string()))
    }

    pub async fn update_leave(&self, id: &str, status: LeaveStatus) -> Result<String, FetchError> {
        let url = self.url(&format!("leave/update/{}", id));
        let resp: ApiMessage = self
            .request(
                self.http.patch(url.as_ref()).json(&SetStatus { status }),
                "PATCH leave/update",
            )
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Leave updated".to_string()))
    }

    // -- employees --

    pub async fn employees(&self) -> Result<Vec<Employee>, FetchError> {
        let resp: EmployeesResponse = self.get(self.url("employee/"), "GET employee/").await?;
        Ok(resp.employees)
    }

    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<String, FetchError> {
        let url = self.url("employee/add");
        let resp: ApiMessage = self
            .request(
                self.http.post(url.as_ref()).json(employee),
                "POST employee/add",
            )
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Employee added".to_string()))
    }

    pub async fn update_employee(
        &self,
        id: &str,
        update: &UpdateEmployee,
    ) -> Result<String, FetchError> {
        let url = self.url(&format!("employee/update/{}", id));
        let resp: ApiMessage = self
            .request(
                self.http.patch(url.as_ref()).json(update),
                "PATCH employee/update",
            )
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Employee updated".to_string()))
    }

    pub async fn delete_employee(&self, id: &str) -> Result<String, FetchError> {
        let url = self.url(&format!("employee/delete/{}", id));
        let resp: ApiMessage = self
            .request(self.http.delete(url.as_ref()), "DELETE employee/delete")
            .await?;
        Ok(resp.message.unwrap_or_else(|| "Employee removed".to_string()))
    }

    // -- payroll --

    pub async fn payrolls(&self) -> Result<Vec<PayrollEntry>, FetchError> {
        let resp: PayrollsResponse = self.get(self.url("payroll/"), "GET payroll/").await?;
        Ok(resp.payrolls)
    }

    /// Generates payroll entries for every employee for the given
    /// `YYYY-MM` month. Returns the server's confirmation and the new
    /// batch.
    pub async fn generate_payrolls(
        &self,
        month_key: &str,
    ) -> Result<GeneratedPayrolls, FetchError> {
        let url = self.url("payroll/generate-all");
        self.request(
            self.http.post(url.as_ref()).json(&SetMonth { month: month_key }),
            "POST payroll/generate-all",
        )
        .await
    }

    // -- reports --

    pub async fn attendance_report(
        &self,
        month_key: &str,
    ) -> Result<Vec<AttendanceSummaryRow>, FetchError> {
        let url = self
            .url("reports/attendance")
            .with_month_filter(month_key);
        let resp: SummaryResponse = self.get(url, "GET reports/attendance").await?;
        Ok(resp.summary)
    }

    pub async fn payroll_report(&self, month_key: &str) -> Result<Vec<PayrollEntry>, FetchError> {
        let url = self.url("reports/payroll").with_month_filter(month_key);
        let resp: PayrollsResponse = self.get(url, "GET reports/payroll").await?;
        Ok(resp.payrolls)
    }

    pub async fn leave_report(&self, month_key: &str) -> Result<Vec<LeaveRequest>, FetchError> {
        let url = self.url("reports/leave").with_month_filter(month_key);
        let resp: LeavesResponse = self.get(url, "GET reports/leave").await?;
        Ok(resp.leaves)
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}

/// Mutation envelope. The backend confirms writes with `{ success,
/// message }` and sometimes tucks the touched row alongside; we only
/// surface the message.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<AttendanceRecord>,
}

#[derive(Debug, Deserialize)]
struct LeavesResponse {
    #[serde(default)]
    leaves: Vec<LeaveRequest>,
}

#[derive(Debug, Deserialize)]
struct EmployeesResponse {
    #[serde(default)]
    employees: Vec<Employee>,
}

#[derive(Debug, Deserialize)]
struct PayrollsResponse {
    #[serde(default)]
    payrolls: Vec<PayrollEntry>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    summary: Vec<AttendanceSummaryRow>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedPayrolls {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub payrolls: Vec<PayrollEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_envelope_defaults_to_empty() {
        let resp: RecordsResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.records.is_empty());
    }

    #[test]
    fn test_record_envelope_parses_rows() {
        let json = r#"{
            "success": true,
            "records": [{
                "_id": "a1",
                "userId": {"_id": "u1", "name": "Ada"},
                "date": "2024-02-05T00:00:00Z",
                "clockIn": "2024-02-05T09:02:11Z",
                "breaks": [{"breakOut": "2024-02-05T12:00:00Z"}],
                "totalHours": 0,
                "status": "Pending"
            }]
        }"#;
        let resp: RecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.records.len(), 1);
        let record = &resp.records[0];
        assert!(record.clock_in.is_some());
        assert!(record.clock_out.is_none());
        assert_eq!(record.breaks.len(), 1);
        assert!(record.breaks[0].break_in.is_none());
    }

    #[test]
    fn test_message_envelope() {
        let resp: ApiMessage =
            serde_json::from_str(r#"{"success":true,"message":"Clocked in"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Clocked in"));
    }
}
