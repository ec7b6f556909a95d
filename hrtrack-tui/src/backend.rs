use hrtrack::domain::{
    AttendanceRecord, AttendanceSummaryRow, Employee, LeaveRequest, LeaveStatus, PayrollEntry,
    Role,
};
use hrtrack::dto::{NewEmployee, NewLeaveRequest};
use hrtrack::{FetchError, HrClient, Session};

use crate::demo::DemoStore;

/// What the app talks to: a real HRTrack server, or the in-memory demo
/// store when one is attached. Every call checks the demo store first so
/// `dev` mode never touches the network.
pub struct Backend {
    client: HrClient,
    demo: Option<DemoStore>,
}

impl Backend {
    pub fn remote(api_url: &str, session: Session) -> Self {
        Self {
            client: HrClient::new(api_url, session),
            demo: None,
        }
    }

    pub fn demo(api_url: &str, role: Role) -> (Self, Session) {
        let store = DemoStore::new(role);
        let session = store.session();
        let backend = Self {
            client: HrClient::new(api_url, session.clone()),
            demo: Some(store),
        };
        (backend, session)
    }

    // Attendance

    pub async fn my_attendance(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.my_records());
        }
        self.client.my_attendance().await
    }

    pub async fn all_attendance(&self) -> Result<Vec<AttendanceRecord>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.all_records());
        }
        self.client.all_attendance().await
    }

    pub async fn clock_in(&self) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.clock_in());
        }
        self.client.clock_in().await
    }

    pub async fn clock_out(&self) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.clock_out());
        }
        self.client.clock_out().await
    }

    pub async fn start_break(&self) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.break_out());
        }
        self.client.start_break().await
    }

    pub async fn end_break(&self) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.break_in());
        }
        self.client.end_break().await
    }

    pub async fn approve_attendance(&self, id: &str) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.set_approval(id, hrtrack::domain::ApprovalStatus::Approved));
        }
        self.client.approve_attendance(id).await
    }

    pub async fn reject_attendance(&self, id: &str) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.set_approval(id, hrtrack::domain::ApprovalStatus::Rejected));
        }
        self.client.reject_attendance(id).await
    }

    // Leave

    pub async fn my_leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.my_leaves());
        }
        self.client.my_leaves().await
    }

    pub async fn review_leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.review_leaves());
        }
        self.client.leaves().await
    }

    pub async fn all_leaves(&self) -> Result<Vec<LeaveRequest>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.all_leaves());
        }
        self.client.all_leaves().await
    }

    pub async fn request_leave(&self, request: &NewLeaveRequest) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.request_leave(request));
        }
        self.client.request_leave(request).await
    }

    pub async fn update_leave(&self, id: &str, status: LeaveStatus) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.update_leave(id, status));
        }
        self.client.update_leave(id, status).await
    }

    // Employees

    pub async fn employees(&self) -> Result<Vec<Employee>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.employees());
        }
        self.client.employees().await
    }

    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.add_employee(employee));
        }
        self.client.add_employee(employee).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.delete_employee(id));
        }
        self.client.delete_employee(id).await
    }

    // Payroll

    pub async fn payrolls(&self) -> Result<Vec<PayrollEntry>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.payrolls());
        }
        self.client.payrolls().await
    }

    pub async fn generate_payrolls(&self, month_key: &str) -> Result<String, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.generate_payrolls(month_key));
        }
        let generated = self.client.generate_payrolls(month_key).await?;
        Ok(generated.message.unwrap_or_else(|| {
            format!("Payroll generated ({} entries)", generated.payrolls.len())
        }))
    }

    // Reports

    pub async fn attendance_report(
        &self,
        month_key: &str,
    ) -> Result<Vec<AttendanceSummaryRow>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.attendance_report(month_key));
        }
        self.client.attendance_report(month_key).await
    }

    pub async fn payroll_report(&self, month_key: &str) -> Result<Vec<PayrollEntry>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.payroll_report(month_key));
        }
        self.client.payroll_report(month_key).await
    }

    pub async fn leave_report(&self, month_key: &str) -> Result<Vec<LeaveRequest>, FetchError> {
        if let Some(demo) = &self.demo {
            return Ok(demo.leave_report(month_key));
        }
        self.client.leave_report(month_key).await
    }
}
