use hrtrack::domain::{LeaveType, Role};
use hrtrack::dto::{NewEmployee, NewLeaveRequest};
use time::macros::format_description;
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    EmployeeHome,
    ManagerHome,
    HrHome,
    Employees,
    AddEmployee,
    Payrolls,
    LeaveForm,
    LeaveReview,
    Reports,
    ConfirmDelete,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::EmployeeHome => "My attendance",
            View::ManagerHome => "Team overview",
            View::HrHome => "HR overview",
            View::Employees => "Employees",
            View::AddEmployee => "Add employee",
            View::Payrolls => "Payroll history",
            View::LeaveForm => "Request leave",
            View::LeaveReview => "Leave review",
            View::Reports => "Reports",
            View::ConfirmDelete => "Remove employee",
        }
    }
}

/// Which of the manager dashboard's two pending queues has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerQueue {
    Timesheets,
    Leaves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTab {
    Attendance,
    Payroll,
    Leave,
}

impl ReportTab {
    pub const ALL: [ReportTab; 3] = [ReportTab::Attendance, ReportTab::Payroll, ReportTab::Leave];

    pub fn label(&self) -> &'static str {
        match self {
            ReportTab::Attendance => "Attendance",
            ReportTab::Payroll => "Payroll",
            ReportTab::Leave => "Leave",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReportTab::Attendance => ReportTab::Payroll,
            ReportTab::Payroll => ReportTab::Leave,
            ReportTab::Leave => ReportTab::Attendance,
        }
    }
}

/// A single-line text input with a byte-indexed cursor.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.value.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self) -> usize {
        let mut idx = self.cursor - 1;
        while !self.value.is_char_boundary(idx) {
            idx -= 1;
        }
        idx
    }

    fn next_boundary(&self) -> usize {
        let mut idx = self.cursor + 1;
        while idx < self.value.len() && !self.value.is_char_boundary(idx) {
            idx += 1;
        }
        idx
    }
}

pub fn parse_form_date(raw: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw, format).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveFormField {
    Type,
    StartDate,
    EndDate,
    Reason,
}

impl LeaveFormField {
    pub fn next(self) -> Self {
        match self {
            LeaveFormField::Type => LeaveFormField::StartDate,
            LeaveFormField::StartDate => LeaveFormField::EndDate,
            LeaveFormField::EndDate => LeaveFormField::Reason,
            LeaveFormField::Reason => LeaveFormField::Type,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LeaveFormField::Type => LeaveFormField::Reason,
            LeaveFormField::StartDate => LeaveFormField::Type,
            LeaveFormField::EndDate => LeaveFormField::StartDate,
            LeaveFormField::Reason => LeaveFormField::EndDate,
        }
    }
}

/// State of the leave request form. Nothing leaves this struct until
/// `validate` has turned it into a request body.
#[derive(Debug, Clone)]
pub struct LeaveFormState {
    pub leave_type: LeaveType,
    pub start_input: TextInput,
    pub end_input: TextInput,
    pub reason_input: TextInput,
    pub focused_field: LeaveFormField,
    pub error: Option<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: LeaveType::Sick,
            start_input: TextInput::default(),
            end_input: TextInput::default(),
            reason_input: TextInput::default(),
            focused_field: LeaveFormField::Type,
            error: None,
        }
    }
}

impl LeaveFormState {
    pub fn cycle_type(&mut self, forward: bool) {
        let types = LeaveType::ALL;
        let idx = types
            .iter()
            .position(|t| *t == self.leave_type)
            .unwrap_or(0);
        let idx = if forward {
            (idx + 1) % types.len()
        } else {
            (idx + types.len() - 1) % types.len()
        };
        self.leave_type = types[idx];
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            LeaveFormField::Type => None,
            LeaveFormField::StartDate => Some(&mut self.start_input),
            LeaveFormField::EndDate => Some(&mut self.end_input),
            LeaveFormField::Reason => Some(&mut self.reason_input),
        }
    }

    /// Checks the form and builds the request body. An `Err` keeps the
    /// request from ever being sent.
    pub fn validate(&self) -> Result<NewLeaveRequest, String> {
        let start_raw = self.start_input.value.trim();
        let end_raw = self.end_input.value.trim();
        let reason = self.reason_input.value.trim();

        if start_raw.is_empty() || end_raw.is_empty() || reason.is_empty() {
            return Err("All fields are required".to_string());
        }

        let start = parse_form_date(start_raw)
            .ok_or_else(|| "Start date must be YYYY-MM-DD".to_string())?;
        let end =
            parse_form_date(end_raw).ok_or_else(|| "End date must be YYYY-MM-DD".to_string())?;
        if end < start {
            return Err("End date is before start date".to_string());
        }

        Ok(NewLeaveRequest {
            leave_type: self.leave_type,
            start_date: start_raw.to_string(),
            end_date: end_raw.to_string(),
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFormField {
    Name,
    Email,
    Password,
    Role,
    Department,
    Position,
    Salary,
}

impl EmployeeFormField {
    pub fn next(self) -> Self {
        match self {
            EmployeeFormField::Name => EmployeeFormField::Email,
            EmployeeFormField::Email => EmployeeFormField::Password,
            EmployeeFormField::Password => EmployeeFormField::Role,
            EmployeeFormField::Role => EmployeeFormField::Department,
            EmployeeFormField::Department => EmployeeFormField::Position,
            EmployeeFormField::Position => EmployeeFormField::Salary,
            EmployeeFormField::Salary => EmployeeFormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EmployeeFormField::Name => EmployeeFormField::Salary,
            EmployeeFormField::Email => EmployeeFormField::Name,
            EmployeeFormField::Password => EmployeeFormField::Email,
            EmployeeFormField::Role => EmployeeFormField::Password,
            EmployeeFormField::Department => EmployeeFormField::Role,
            EmployeeFormField::Position => EmployeeFormField::Department,
            EmployeeFormField::Salary => EmployeeFormField::Position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EmployeeFormState {
    pub name_input: TextInput,
    pub email_input: TextInput,
    pub password_input: TextInput,
    pub role: Role,
    pub department_input: TextInput,
    pub position_input: TextInput,
    pub salary_input: TextInput,
    pub focused_field: EmployeeFormField,
    pub error: Option<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            name_input: TextInput::default(),
            email_input: TextInput::default(),
            password_input: TextInput::default(),
            role: Role::Employee,
            department_input: TextInput::default(),
            position_input: TextInput::default(),
            salary_input: TextInput::default(),
            focused_field: EmployeeFormField::Name,
            error: None,
        }
    }
}

impl EmployeeFormState {
    const ROLES: [Role; 3] = [Role::Employee, Role::Manager, Role::Hr];

    pub fn cycle_role(&mut self, forward: bool) {
        let idx = Self::ROLES
            .iter()
            .position(|r| *r == self.role)
            .unwrap_or(0);
        let idx = if forward {
            (idx + 1) % Self::ROLES.len()
        } else {
            (idx + Self::ROLES.len() - 1) % Self::ROLES.len()
        };
        self.role = Self::ROLES[idx];
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            EmployeeFormField::Name => Some(&mut self.name_input),
            EmployeeFormField::Email => Some(&mut self.email_input),
            EmployeeFormField::Password => Some(&mut self.password_input),
            EmployeeFormField::Role => None,
            EmployeeFormField::Department => Some(&mut self.department_input),
            EmployeeFormField::Position => Some(&mut self.position_input),
            EmployeeFormField::Salary => Some(&mut self.salary_input),
        }
    }

    pub fn validate(&self) -> Result<NewEmployee, String> {
        let name = self.name_input.value.trim();
        let email = self.email_input.value.trim();
        let password = self.password_input.value.trim();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err("Name, email and password are required".to_string());
        }
        if !email.contains('@') {
            return Err("Email does not look valid".to_string());
        }

        let salary_raw = self.salary_input.value.trim();
        let salary = if salary_raw.is_empty() {
            None
        } else {
            Some(
                salary_raw
                    .parse::<f64>()
                    .map_err(|_| "Salary must be a number".to_string())?,
            )
        };

        let optional = |input: &TextInput| {
            let trimmed = input.value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Ok(NewEmployee {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: self.role,
            department: optional(&self.department_input),
            position: optional(&self.position_input),
            salary,
        })
    }
}

/// Pending employee removal, carried into the confirmation view.
#[derive(Debug, Clone)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_editing() {
        let mut input = TextInput::default();
        for c in "héllo".chars() {
            input.insert(c);
        }
        assert_eq!(input.value, "héllo");

        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value, "hélo");

        input.home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.value, "hlo");

        input.end();
        assert_eq!(input.cursor, input.value.len());
    }

    fn filled_leave_form(start: &str, end: &str, reason: &str) -> LeaveFormState {
        let mut form = LeaveFormState::default();
        form.start_input.value = start.to_string();
        form.end_input.value = end.to_string();
        form.reason_input.value = reason.to_string();
        form
    }

    #[test]
    fn test_leave_form_requires_every_field() {
        assert!(filled_leave_form("", "2024-03-02", "trip").validate().is_err());
        assert!(filled_leave_form("2024-03-01", "", "trip").validate().is_err());
        assert!(filled_leave_form("2024-03-01", "2024-03-02", "  ")
            .validate()
            .is_err());
    }

    #[test]
    fn test_leave_form_rejects_reversed_range() {
        let err = filled_leave_form("2024-03-05", "2024-03-01", "trip")
            .validate()
            .unwrap_err();
        assert_eq!(err, "End date is before start date");
    }

    #[test]
    fn test_leave_form_rejects_malformed_dates() {
        assert!(filled_leave_form("03/01/2024", "2024-03-02", "trip")
            .validate()
            .is_err());
    }

    #[test]
    fn test_leave_form_builds_request() {
        let mut form = filled_leave_form("2024-03-01", "2024-03-03", "Family trip");
        form.leave_type = LeaveType::Vacation;

        let request = form.validate().unwrap();
        assert_eq!(request.start_date, "2024-03-01");
        assert_eq!(request.leave_type, LeaveType::Vacation);
    }

    #[test]
    fn test_single_day_leave_is_valid() {
        assert!(filled_leave_form("2024-03-01", "2024-03-01", "errand")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_employee_form_validation() {
        let mut form = EmployeeFormState::default();
        assert!(form.validate().is_err());

        form.name_input.value = "New Person".to_string();
        form.email_input.value = "new@example.com".to_string();
        form.password_input.value = "hunter2".to_string();
        form.salary_input.value = "abc".to_string();
        assert_eq!(form.validate().unwrap_err(), "Salary must be a number");

        form.salary_input.value = "3500".to_string();
        let employee = form.validate().unwrap();
        assert_eq!(employee.salary, Some(3500.0));
        assert_eq!(employee.role, Role::Employee);
        assert_eq!(employee.department, None);
    }

    #[test]
    fn test_leave_type_cycling_wraps() {
        let mut form = LeaveFormState::default();
        assert_eq!(form.leave_type, LeaveType::Sick);
        form.cycle_type(false);
        assert_eq!(form.leave_type, LeaveType::Unpaid);
        form.cycle_type(true);
        assert_eq!(form.leave_type, LeaveType::Sick);
    }
}
