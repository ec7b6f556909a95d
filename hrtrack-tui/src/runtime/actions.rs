use anyhow::Result;
use hrtrack::domain::{month_key, Dashboard, LeaveStatus};
use hrtrack::FetchError;
use time::OffsetDateTime;

use crate::app::{App, View};
use crate::backend::Backend;
use crate::time_utils::to_local_time;

use super::action_queue::Action;

const SESSION_EXPIRED: &str = "Session expired. Run `hrtrack-tui login` to sign in again.";

pub(super) async fn run_action(action: Action, app: &mut App, backend: &Backend) -> Result<()> {
    match action {
        Action::LoadDashboard | Action::RefreshBackground => load_dashboard(app, backend).await,
        Action::ClockIn => {
            let result = backend.clock_in().await;
            finish_clock_action(app, backend, result, "clocking in").await
        }
        Action::ClockOut => {
            let result = backend.clock_out().await;
            finish_clock_action(app, backend, result, "clocking out").await
        }
        Action::StartBreak => {
            let result = backend.start_break().await;
            finish_clock_action(app, backend, result, "starting break").await
        }
        Action::EndBreak => {
            let result = backend.end_break().await;
            finish_clock_action(app, backend, result, "ending break").await
        }
        Action::SubmitLeave => handle_submit_leave(app, backend).await,
        Action::ApproveLeave { id } => {
            handle_leave_review(app, backend, &id, LeaveStatus::Approved).await
        }
        Action::RejectLeave { id } => {
            handle_leave_review(app, backend, &id, LeaveStatus::Rejected).await
        }
        Action::LoadLeaveReview => load_leave_review(app, backend).await,
        Action::ApproveTimesheet { id } => {
            let result = backend.approve_attendance(&id).await;
            finish_timesheet_review(app, backend, result).await
        }
        Action::RejectTimesheet { id } => {
            let result = backend.reject_attendance(&id).await;
            finish_timesheet_review(app, backend, result).await
        }
        Action::LoadEmployees => load_employees(app, backend).await,
        Action::SubmitEmployee => handle_submit_employee(app, backend).await,
        Action::DeleteEmployee => handle_delete_employee(app, backend).await,
        Action::LoadPayrolls => load_payrolls(app, backend).await,
        Action::GeneratePayroll => handle_generate_payroll(app, backend).await,
        Action::LoadReports => load_reports(app, backend).await,
    }
}

/// A 401/403 means the token is gone for good: drop the session and fall
/// back to the login screen. Anything else stays on the affected view.
fn handle_fetch_error(app: &mut App, view: View, what: &str, error: FetchError) {
    match error {
        FetchError::Unauthorized => app.drop_session(SESSION_EXPIRED),
        error => {
            app.view_errors
                .insert(view, format!("Could not load {}: {}", what, error));
        }
    }
}

fn handle_action_error(app: &mut App, what: &str, error: FetchError) {
    match error {
        FetchError::Unauthorized => app.drop_session(SESSION_EXPIRED),
        error => app.set_status(format!("Error {}: {}", what, error)),
    }
}

/// Fetches everything the current role's dashboard shows.
async fn load_dashboard(app: &mut App, backend: &Backend) -> Result<()> {
    match Dashboard::for_session(app.session.as_ref()) {
        Dashboard::Employee => match backend.my_attendance().await {
            Ok(records) => match backend.my_leaves().await {
                Ok(leaves) => {
                    app.view_errors.remove(&View::EmployeeHome);
                    app.update_my_data(records, leaves);
                }
                Err(e) => handle_fetch_error(app, View::EmployeeHome, "your leave requests", e),
            },
            Err(e) => handle_fetch_error(app, View::EmployeeHome, "your attendance", e),
        },
        Dashboard::Manager => {
            match backend.all_attendance().await {
                Ok(records) => {
                    app.view_errors.remove(&View::ManagerHome);
                    app.update_team_records(records);
                }
                Err(e) => handle_fetch_error(app, View::ManagerHome, "team attendance", e),
            }
            if app.session.is_none() {
                return Ok(());
            }
            match backend.review_leaves().await {
                Ok(leaves) => app.update_review_leaves(leaves),
                Err(e) => handle_fetch_error(app, View::ManagerHome, "leave requests", e),
            }
        }
        Dashboard::HrAdmin => {
            match backend.employees().await {
                Ok(list) => {
                    app.view_errors.remove(&View::HrHome);
                    app.update_employees(list);
                }
                Err(e) => handle_fetch_error(app, View::HrHome, "employees", e),
            }
            if app.session.is_none() {
                return Ok(());
            }
            match backend.payrolls().await {
                Ok(entries) => app.update_payrolls(entries),
                Err(e) => handle_fetch_error(app, View::HrHome, "payroll history", e),
            }
            if app.session.is_none() {
                return Ok(());
            }
            match backend.all_leaves().await {
                Ok(leaves) => app.update_all_leaves(leaves),
                Err(e) => handle_fetch_error(app, View::HrHome, "leave requests", e),
            }
        }
        Dashboard::Login => {}
    }
    Ok(())
}

async fn finish_clock_action(
    app: &mut App,
    backend: &Backend,
    result: Result<String, FetchError>,
    what: &str,
) -> Result<()> {
    match result {
        Ok(message) => {
            app.set_status(message);
            load_dashboard(app, backend).await?;
        }
        Err(e) => handle_action_error(app, what, e),
    }
    Ok(())
}

async fn handle_submit_leave(app: &mut App, backend: &Backend) -> Result<()> {
    let request = match app.leave_form.validate() {
        Ok(request) => request,
        Err(message) => {
            app.leave_form.error = Some(message);
            return Ok(());
        }
    };

    match backend.request_leave(&request).await {
        Ok(message) => {
            app.navigate_to(View::EmployeeHome);
            app.set_status(message);
            load_dashboard(app, backend).await?;
        }
        Err(FetchError::Unauthorized) => app.drop_session(SESSION_EXPIRED),
        Err(e) => app.leave_form.error = Some(format!("Could not submit: {}", e)),
    }
    Ok(())
}

async fn handle_leave_review(
    app: &mut App,
    backend: &Backend,
    id: &str,
    status: LeaveStatus,
) -> Result<()> {
    match backend.update_leave(id, status).await {
        Ok(message) => {
            app.set_status(message);
            load_leave_review(app, backend).await?;
            // The HR dashboard counts pending leave across the company.
            if app.session.is_some()
                && Dashboard::for_session(app.session.as_ref()) == Dashboard::HrAdmin
            {
                match backend.all_leaves().await {
                    Ok(leaves) => app.update_all_leaves(leaves),
                    Err(e) => handle_fetch_error(app, View::HrHome, "leave requests", e),
                }
            }
        }
        Err(e) => handle_action_error(app, "updating leave", e),
    }
    Ok(())
}

async fn load_leave_review(app: &mut App, backend: &Backend) -> Result<()> {
    match backend.review_leaves().await {
        Ok(leaves) => {
            app.view_errors.remove(&View::LeaveReview);
            app.update_review_leaves(leaves);
        }
        Err(e) => handle_fetch_error(app, View::LeaveReview, "leave requests", e),
    }
    Ok(())
}

async fn finish_timesheet_review(
    app: &mut App,
    backend: &Backend,
    result: Result<String, FetchError>,
) -> Result<()> {
    match result {
        Ok(message) => {
            app.set_status(message);
            match backend.all_attendance().await {
                Ok(records) => app.update_team_records(records),
                Err(e) => handle_fetch_error(app, View::ManagerHome, "team attendance", e),
            }
        }
        Err(e) => handle_action_error(app, "updating attendance", e),
    }
    Ok(())
}

async fn load_employees(app: &mut App, backend: &Backend) -> Result<()> {
    match backend.employees().await {
        Ok(list) => {
            app.view_errors.remove(&View::Employees);
            app.update_employees(list);
        }
        Err(e) => handle_fetch_error(app, View::Employees, "employees", e),
    }
    Ok(())
}

async fn handle_submit_employee(app: &mut App, backend: &Backend) -> Result<()> {
    let employee = match app.employee_form.validate() {
        Ok(employee) => employee,
        Err(message) => {
            app.employee_form.error = Some(message);
            return Ok(());
        }
    };

    match backend.add_employee(&employee).await {
        Ok(message) => {
            app.navigate_to(View::Employees);
            app.set_status(message);
            load_employees(app, backend).await?;
        }
        Err(FetchError::Unauthorized) => app.drop_session(SESSION_EXPIRED),
        Err(e) => app.employee_form.error = Some(format!("Could not save: {}", e)),
    }
    Ok(())
}

async fn handle_delete_employee(app: &mut App, backend: &Backend) -> Result<()> {
    let Some(target) = app.delete_target.take() else {
        app.navigate_to(View::Employees);
        return Ok(());
    };

    app.navigate_to(View::Employees);
    match backend.delete_employee(&target.id).await {
        Ok(message) => {
            app.set_status(format!("{} ({})", message, target.name));
            load_employees(app, backend).await?;
        }
        Err(e) => handle_action_error(app, "removing employee", e),
    }
    Ok(())
}

async fn load_payrolls(app: &mut App, backend: &Backend) -> Result<()> {
    match backend.payrolls().await {
        Ok(entries) => {
            app.view_errors.remove(&View::Payrolls);
            app.update_payrolls(entries);
        }
        Err(e) => handle_fetch_error(app, View::Payrolls, "payroll history", e),
    }
    Ok(())
}

async fn handle_generate_payroll(app: &mut App, backend: &Backend) -> Result<()> {
    let month = month_key(to_local_time(OffsetDateTime::now_utc()).date());
    match backend.generate_payrolls(&month).await {
        Ok(message) => {
            app.set_status(message);
            load_payrolls(app, backend).await?;
        }
        Err(e) => handle_action_error(app, "generating payroll", e),
    }
    Ok(())
}

async fn load_reports(app: &mut App, backend: &Backend) -> Result<()> {
    let month = app.report_month_key();
    let attendance = backend.attendance_report(&month).await;
    let payroll = backend.payroll_report(&month).await;
    let leave = backend.leave_report(&month).await;

    // The user may have stepped the month or left the view while the
    // fetches were in flight; stale rows are dropped.
    if app.current_view != View::Reports || app.report_month_key() != month {
        return Ok(());
    }

    match (attendance, payroll, leave) {
        (Ok(attendance), Ok(payroll), Ok(leave)) => {
            app.view_errors.remove(&View::Reports);
            app.update_reports(attendance, payroll, leave);
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            handle_fetch_error(app, View::Reports, "reports", e)
        }
    }
    Ok(())
}
