use crossterm::event::{KeyCode, KeyEvent};
use hrtrack::domain::{
    EMPLOYEE_LIST_ROLES, LEAVE_REVIEW_ROLES, PAYROLL_HISTORY_ROLES, REPORTS_ROLES,
};

use crate::app::{App, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('g') => enqueue_action(action_tx, Action::GeneratePayroll),
        KeyCode::Char('e') => {
            if app.can_open(EMPLOYEE_LIST_ROLES) {
                app.navigate_to(View::Employees);
                enqueue_action(action_tx, Action::LoadEmployees);
            }
        }
        KeyCode::Char('p') => {
            if app.can_open(PAYROLL_HISTORY_ROLES) {
                app.navigate_to(View::Payrolls);
                enqueue_action(action_tx, Action::LoadPayrolls);
            }
        }
        KeyCode::Char('v') => {
            if app.can_open(LEAVE_REVIEW_ROLES) {
                app.navigate_to(View::LeaveReview);
                enqueue_action(action_tx, Action::LoadLeaveReview);
            }
        }
        KeyCode::Char('r') => {
            if app.can_open(REPORTS_ROLES) {
                app.navigate_to(View::Reports);
                enqueue_action(action_tx, Action::LoadReports);
            }
        }
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadDashboard),
        _ => {}
    }
}
