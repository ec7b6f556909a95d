use crossterm::event::{KeyCode, KeyEvent};
use hrtrack::domain::{LEAVE_REVIEW_ROLES, PAYROLL_HISTORY_ROLES, REPORTS_ROLES};

use crate::app::{App, ManagerQueue, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab => app.toggle_manager_queue(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('a') => review_focused(app, action_tx, true),
        KeyCode::Char('x') => review_focused(app, action_tx, false),
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

fn review_focused(app: &mut App, action_tx: &ActionTx, approve: bool) {
    match app.manager_queue {
        ManagerQueue::Timesheets => {
            let Some(record) = app.selected_timesheet() else {
                return;
            };
            let id = record.id.clone();
            let action = if approve {
                Action::ApproveTimesheet { id }
            } else {
                Action::RejectTimesheet { id }
            };
            enqueue_action(action_tx, action);
        }
        ManagerQueue::Leaves => {
            let Some(leave) = app.selected_pending_leave() else {
                return;
            };
            let id = leave.id.clone();
            let action = if approve {
                Action::ApproveLeave { id }
            } else {
                Action::RejectLeave { id }
            };
            enqueue_action(action_tx, action);
        }
    }
}
