use std::collections::HashMap;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use hrtrack::domain::{
    attendance_rate, batch_summary, completed_in_month, count_by_status, count_by_type,
    derive_status, grand_total, in_progress_today, present_days, route_allows, todays_hours,
    workdays_in_month, ApprovalStatus, AttendanceRecord, AttendanceStatus, AttendanceSummaryRow,
    BatchSummary, Dashboard, Employee, LeaveCounts, LeaveRequest, LeaveStatus, LeaveType,
    PayrollEntry, Role,
};
use hrtrack::Session;
use time::{Month, OffsetDateTime};

use crate::time_utils::to_local_time;

mod state;
pub use state::{
    DeleteTarget, EmployeeFormField, EmployeeFormState, LeaveFormField, LeaveFormState,
    ManagerQueue, ReportTab, TextInput, View,
};

pub struct App {
    pub running: bool,
    pub session: Option<Session>,
    pub current_view: View,
    pub status_message: Option<String>,
    /// Fetch failures, kept per view so one broken panel does not blank
    /// out the others.
    pub view_errors: HashMap<View, String>,

    // My attendance (employee dashboard)
    pub my_records: Vec<AttendanceRecord>,
    pub my_leaves: Vec<LeaveRequest>,
    pub my_history_scroll: usize,

    // Team data (manager dashboard)
    pub team_records: Vec<AttendanceRecord>,
    pub review_leaves: Vec<LeaveRequest>,
    pub manager_queue: ManagerQueue,
    pub timesheet_index: usize,
    pub leave_index: usize,

    // Staff directory
    pub employees: Vec<Employee>,
    pub employee_search_input: TextInput,
    pub filtered_employees: Vec<Employee>,
    pub employee_index: usize,
    pub employee_list_focused: bool,
    pub delete_target: Option<DeleteTarget>,
    pub employee_form: EmployeeFormState,

    // Payroll
    pub payrolls: Vec<PayrollEntry>,
    pub payroll_scroll: usize,

    // Company-wide leave (HR dashboard)
    pub all_leaves: Vec<LeaveRequest>,

    // Leave request form
    pub leave_form: LeaveFormState,
    pub review_index: usize,

    // Reports
    pub report_tab: ReportTab,
    pub report_year: i32,
    pub report_month: Month,
    pub attendance_report_rows: Vec<AttendanceSummaryRow>,
    pub payroll_report_rows: Vec<PayrollEntry>,
    pub leave_report_rows: Vec<LeaveRequest>,

    // Caches, computed once per data update and read every render frame
    pub today_status: AttendanceStatus,
    pub today_hours: f64,
    pub month_workdays: u32,
    pub month_present_days: u32,
    pub month_rate: u8,
    pub my_leave_counts: LeaveCounts,
    pub team_in_progress: usize,
    pub team_completed_month: usize,
    pub pending_timesheets: Vec<usize>,
    pub pending_leaves: Vec<usize>,
    pub leave_counts: LeaveCounts,
    pub payroll_grand_total: f64,
    pub latest_batch: Option<BatchSummary>,
    pub leave_type_counts: [(LeaveType, usize); 3],

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(session: Option<Session>) -> Self {
        let today = to_local_time(OffsetDateTime::now_utc()).date();
        let mut app = Self {
            running: true,
            session,
            current_view: View::Login,
            status_message: None,
            view_errors: HashMap::new(),
            my_records: Vec::new(),
            my_leaves: Vec::new(),
            my_history_scroll: 0,
            team_records: Vec::new(),
            review_leaves: Vec::new(),
            manager_queue: ManagerQueue::Timesheets,
            timesheet_index: 0,
            leave_index: 0,
            employees: Vec::new(),
            employee_search_input: TextInput::default(),
            filtered_employees: Vec::new(),
            employee_index: 0,
            employee_list_focused: false,
            delete_target: None,
            employee_form: EmployeeFormState::default(),
            payrolls: Vec::new(),
            payroll_scroll: 0,
            all_leaves: Vec::new(),
            leave_form: LeaveFormState::default(),
            review_index: 0,
            report_tab: ReportTab::Attendance,
            report_year: today.year(),
            report_month: today.month(),
            attendance_report_rows: Vec::new(),
            payroll_report_rows: Vec::new(),
            leave_report_rows: Vec::new(),
            today_status: AttendanceStatus::Idle,
            today_hours: 0.0,
            month_workdays: 0,
            month_present_days: 0,
            month_rate: 0,
            my_leave_counts: LeaveCounts::default(),
            team_in_progress: 0,
            team_completed_month: 0,
            pending_timesheets: Vec::new(),
            pending_leaves: Vec::new(),
            leave_counts: LeaveCounts::default(),
            payroll_grand_total: 0.0,
            latest_batch: None,
            leave_type_counts: count_by_type(&[]),
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        };
        app.current_view = app.home_view();
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.user.role)
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user.id.as_str())
    }

    /// The dashboard this session lands on. Anything without a valid
    /// session and a known role goes to the login screen.
    pub fn home_view(&self) -> View {
        match Dashboard::for_session(self.session.as_ref()) {
            Dashboard::Employee => View::EmployeeHome,
            Dashboard::Manager => View::ManagerHome,
            Dashboard::HrAdmin => View::HrHome,
            Dashboard::Login => View::Login,
        }
    }

    pub fn can_open(&self, allowed: &[Role]) -> bool {
        route_allows(allowed, self.session.as_ref())
    }

    pub fn navigate_to(&mut self, view: View) {
        self.clear_status();
        match view {
            View::Employees => {
                self.employee_search_input.clear();
                self.employee_list_focused = false;
                self.employee_index = 0;
                self.filter_employees();
            }
            View::AddEmployee => self.employee_form = EmployeeFormState::default(),
            View::LeaveForm => self.leave_form = LeaveFormState::default(),
            View::LeaveReview => self.review_index = 0,
            View::Payrolls => self.payroll_scroll = 0,
            View::Reports => {
                let today = to_local_time(OffsetDateTime::now_utc()).date();
                self.report_year = today.year();
                self.report_month = today.month();
                self.report_tab = ReportTab::Attendance;
            }
            _ => {}
        }
        self.current_view = view;
    }

    /// Tears the session down and lands on the login screen. Used when the
    /// backend answers 401/403 mid-session.
    pub fn drop_session(&mut self, message: impl Into<String>) {
        self.session = None;
        self.my_records.clear();
        self.my_leaves.clear();
        self.team_records.clear();
        self.review_leaves.clear();
        self.employees.clear();
        self.filtered_employees.clear();
        self.payrolls.clear();
        self.all_leaves.clear();
        self.attendance_report_rows.clear();
        self.payroll_report_rows.clear();
        self.leave_report_rows.clear();
        self.view_errors.clear();
        self.current_view = View::Login;
        self.set_status(message);
    }

    pub fn is_in_edit_mode(&self) -> bool {
        matches!(
            self.current_view,
            View::LeaveForm | View::AddEmployee | View::ConfirmDelete
        )
    }

    // Data updates. Sorting and the derived numbers happen here, not in
    // the render path.

    pub fn update_my_data(&mut self, mut records: Vec<AttendanceRecord>, mut leaves: Vec<LeaveRequest>) {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let today = OffsetDateTime::now_utc().date();
        self.today_status = derive_status(records.iter().find(|r| r.is_on(today)));
        self.today_hours = todays_hours(&records, today);
        self.month_workdays = workdays_in_month(today.year(), today.month());
        self.month_present_days = present_days(&records, today.year(), today.month());
        self.month_rate = attendance_rate(&records, today.year(), today.month());
        self.my_leave_counts = count_by_status(&leaves);

        self.my_records = records;
        self.my_leaves = leaves;
        if self.my_history_scroll >= self.my_records.len() {
            self.my_history_scroll = self.my_records.len().saturating_sub(1);
        }
    }

    pub fn update_team_records(&mut self, mut records: Vec<AttendanceRecord>) {
        records.sort_by(|a, b| b.date.cmp(&a.date));

        let today = OffsetDateTime::now_utc().date();
        self.team_in_progress = in_progress_today(&records, today);
        self.team_completed_month = completed_in_month(&records, today.year(), today.month());

        // Only finished days wait for approval; an open record is not a
        // timesheet yet.
        self.pending_timesheets = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.approval == ApprovalStatus::Pending && r.clock_out.is_some())
            .map(|(i, _)| i)
            .collect();

        self.team_records = records;
        self.timesheet_index = self
            .timesheet_index
            .min(self.pending_timesheets.len().saturating_sub(1));
    }

    pub fn update_review_leaves(&mut self, mut leaves: Vec<LeaveRequest>) {
        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.pending_leaves = leaves
            .iter()
            .enumerate()
            .filter(|(_, l)| l.status == LeaveStatus::Pending)
            .map(|(i, _)| i)
            .collect();

        self.review_leaves = leaves;
        self.leave_index = self.leave_index.min(self.pending_leaves.len().saturating_sub(1));
        if self.review_index >= self.review_leaves.len() {
            self.review_index = self.review_leaves.len().saturating_sub(1);
        }
    }

    pub fn update_employees(&mut self, employees: Vec<Employee>) {
        let mut listed: Vec<Employee> = employees.into_iter().filter(|e| e.is_listed()).collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        self.employees = listed;
        self.filter_employees();
    }

    pub fn update_payrolls(&mut self, entries: Vec<PayrollEntry>) {
        self.payroll_grand_total = grand_total(&entries);
        self.latest_batch = batch_summary(&entries);
        self.payrolls = entries;
        if self.payroll_scroll >= self.payrolls.len() {
            self.payroll_scroll = self.payrolls.len().saturating_sub(1);
        }
    }

    pub fn update_all_leaves(&mut self, leaves: Vec<LeaveRequest>) {
        self.leave_counts = count_by_status(&leaves);
        self.all_leaves = leaves;
    }

    pub fn update_reports(
        &mut self,
        attendance: Vec<AttendanceSummaryRow>,
        payroll: Vec<PayrollEntry>,
        leave: Vec<LeaveRequest>,
    ) {
        self.leave_type_counts = count_by_type(&leave);
        self.attendance_report_rows = attendance;
        self.payroll_report_rows = payroll;
        self.leave_report_rows = leave;
    }

    // Staff directory search

    pub fn filter_employees(&mut self) {
        let input = &self.employee_search_input.value;
        if input.is_empty() {
            self.filtered_employees = self.employees.clone();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(Employee, i64)> = self
                .employees
                .iter()
                .filter_map(|e| {
                    let name_score = matcher.fuzzy_match(&e.name, input);
                    let email_score = matcher.fuzzy_match(&e.email, input);
                    name_score.max(email_score).map(|score| (e.clone(), score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            self.filtered_employees = scored.into_iter().map(|(e, _)| e).collect();
        }

        if self.employee_index >= self.filtered_employees.len() {
            self.employee_index = self.filtered_employees.len().saturating_sub(1);
        }
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.filtered_employees.get(self.employee_index)
    }

    /// Populate delete_target from the selected row and switch to the
    /// confirmation view.
    pub fn enter_delete_confirm(&mut self) {
        let Some(employee) = self.selected_employee() else {
            return;
        };
        self.delete_target = Some(DeleteTarget {
            id: employee.id.clone(),
            name: employee.name.clone(),
        });
        self.current_view = View::ConfirmDelete;
    }

    // Selection movement, wrap-around like every list in the app

    pub fn select_next(&mut self) {
        self.step_selection(true);
    }

    pub fn select_previous(&mut self) {
        self.step_selection(false);
    }

    fn step_selection(&mut self, forward: bool) {
        let step = |idx: usize, len: usize| -> usize {
            if len == 0 {
                0
            } else if forward {
                (idx + 1) % len
            } else {
                (idx + len - 1) % len
            }
        };

        match self.current_view {
            View::EmployeeHome => {
                let len = self.my_records.len();
                if len > 0 {
                    self.my_history_scroll = if forward {
                        (self.my_history_scroll + 1).min(len - 1)
                    } else {
                        self.my_history_scroll.saturating_sub(1)
                    };
                }
            }
            View::ManagerHome => match self.manager_queue {
                ManagerQueue::Timesheets => {
                    self.timesheet_index = step(self.timesheet_index, self.pending_timesheets.len())
                }
                ManagerQueue::Leaves => {
                    self.leave_index = step(self.leave_index, self.pending_leaves.len())
                }
            },
            View::Employees => {
                self.employee_index = step(self.employee_index, self.filtered_employees.len())
            }
            View::Payrolls => {
                let len = self.payrolls.len();
                if len > 0 {
                    self.payroll_scroll = if forward {
                        (self.payroll_scroll + 1).min(len - 1)
                    } else {
                        self.payroll_scroll.saturating_sub(1)
                    };
                }
            }
            View::LeaveReview => {
                self.review_index = step(self.review_index, self.review_leaves.len())
            }
            _ => {}
        }
    }

    pub fn toggle_manager_queue(&mut self) {
        self.manager_queue = match self.manager_queue {
            ManagerQueue::Timesheets => ManagerQueue::Leaves,
            ManagerQueue::Leaves => ManagerQueue::Timesheets,
        };
    }

    /// The pending timesheet under the cursor on the manager dashboard.
    pub fn selected_timesheet(&self) -> Option<&AttendanceRecord> {
        let idx = *self.pending_timesheets.get(self.timesheet_index)?;
        self.team_records.get(idx)
    }

    /// The pending leave request under the cursor on the manager dashboard.
    pub fn selected_pending_leave(&self) -> Option<&LeaveRequest> {
        let idx = *self.pending_leaves.get(self.leave_index)?;
        self.review_leaves.get(idx)
    }

    pub fn selected_review_leave(&self) -> Option<&LeaveRequest> {
        self.review_leaves.get(self.review_index)
    }

    // Report month stepping

    pub fn report_month_key(&self) -> String {
        format!("{:04}-{:02}", self.report_year, self.report_month as u8)
    }

    pub fn step_report_month(&mut self, forward: bool) {
        let (year, month) = if forward {
            hrtrack::domain::next_month(self.report_year, self.report_month)
        } else {
            hrtrack::domain::previous_month(self.report_year, self.report_month)
        };
        self.report_year = year;
        self.report_month = month;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrtrack::domain::UserRef;
    use hrtrack::SessionUser;
    use time::macros::datetime;

    fn session(role: Role) -> Session {
        Session {
            token: "tok".to_string(),
            user: SessionUser {
                id: "u1".to_string(),
                name: "Test".to_string(),
                email: "t@example.com".to_string(),
                role,
            },
        }
    }

    fn employee(id: &str, name: &str, email: &str, role: Role) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: None,
            position: None,
            salary: None,
            created_at: None,
        }
    }

    fn leave(id: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            user: UserRef {
                id: "u2".to_string(),
                name: "Other".to_string(),
                role: None,
            },
            leave_type: LeaveType::Vacation,
            start_date: datetime!(2024-03-01 00:00 UTC),
            end_date: datetime!(2024-03-02 00:00 UTC),
            reason: "trip".to_string(),
            status,
            created_at: datetime!(2024-02-20 12:00 UTC),
        }
    }

    #[test]
    fn test_each_role_lands_on_its_dashboard() {
        assert_eq!(
            App::new(Some(session(Role::Employee))).current_view,
            View::EmployeeHome
        );
        assert_eq!(
            App::new(Some(session(Role::Manager))).current_view,
            View::ManagerHome
        );
        assert_eq!(App::new(Some(session(Role::Hr))).current_view, View::HrHome);
        assert_eq!(
            App::new(Some(session(Role::Admin))).current_view,
            View::HrHome
        );
        assert_eq!(App::new(None).current_view, View::Login);
    }

    #[test]
    fn test_unknown_role_lands_on_login() {
        let app = App::new(Some(session(Role::Unknown)));
        assert_eq!(app.current_view, View::Login);
    }

    #[test]
    fn test_drop_session_clears_everything() {
        let mut app = App::new(Some(session(Role::Hr)));
        app.update_employees(vec![employee("e1", "A", "a@x.test", Role::Employee)]);
        app.update_all_leaves(vec![leave("l1", LeaveStatus::Pending)]);

        app.drop_session("Session expired");
        assert_eq!(app.current_view, View::Login);
        assert!(app.session.is_none());
        assert!(app.employees.is_empty());
        assert!(app.all_leaves.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Session expired"));
    }

    #[test]
    fn test_admin_is_filtered_from_directory() {
        let mut app = App::new(Some(session(Role::Hr)));
        app.update_employees(vec![
            employee("e1", "Zoe", "zoe@x.test", Role::Employee),
            employee("e2", "Root", "root@x.test", Role::Admin),
            employee("e3", "Amir", "amir@x.test", Role::Manager),
        ]);

        let names: Vec<&str> = app.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Amir", "Zoe"]);
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let mut app = App::new(Some(session(Role::Hr)));
        app.update_employees(vec![
            employee("e1", "Zoe Park", "zoe@x.test", Role::Employee),
            employee("e2", "Amir Khan", "amir@corp.test", Role::Employee),
        ]);

        app.employee_search_input.value = "corp".to_string();
        app.filter_employees();
        assert_eq!(app.filtered_employees.len(), 1);
        assert_eq!(app.filtered_employees[0].name, "Amir Khan");
    }

    #[test]
    fn test_pending_queues_skip_open_records() {
        let mut app = App::new(Some(session(Role::Manager)));

        let open = AttendanceRecord {
            id: "a1".to_string(),
            user: UserRef {
                id: "u2".to_string(),
                name: "Other".to_string(),
                role: None,
            },
            date: datetime!(2024-03-04 00:00 UTC),
            clock_in: Some(datetime!(2024-03-04 09:00 UTC)),
            clock_out: None,
            breaks: Vec::new(),
            total_hours: 0.0,
            approval: ApprovalStatus::Pending,
        };
        let mut closed = open.clone();
        closed.id = "a2".to_string();
        closed.clock_out = Some(datetime!(2024-03-04 17:00 UTC));

        app.update_team_records(vec![open, closed]);
        app.update_review_leaves(vec![leave("l1", LeaveStatus::Approved)]);
        assert_eq!(app.pending_timesheets.len(), 1);
        assert!(app.pending_leaves.is_empty());
        assert_eq!(app.selected_timesheet().map(|r| r.id.as_str()), Some("a2"));
    }

    #[test]
    fn test_report_month_stepping() {
        let mut app = App::new(Some(session(Role::Hr)));
        app.report_year = 2024;
        app.report_month = Month::January;

        app.step_report_month(false);
        assert_eq!(app.report_month_key(), "2023-12");
        app.step_report_month(true);
        assert_eq!(app.report_month_key(), "2024-01");
    }

    #[test]
    fn test_navigation_gates_by_role() {
        let app = App::new(Some(session(Role::Employee)));
        assert!(!app.can_open(hrtrack::domain::EMPLOYEE_LIST_ROLES));
        assert!(app.can_open(hrtrack::domain::REQUEST_LEAVE_ROLES));

        let hr = App::new(Some(session(Role::Hr)));
        assert!(hr.can_open(hrtrack::domain::EMPLOYEE_LIST_ROLES));
        assert!(!hr.can_open(hrtrack::domain::REQUEST_LEAVE_ROLES));
    }
}
