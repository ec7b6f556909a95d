use crossterm::event::KeyEvent;

use crate::app::{App, View};

use super::action_queue::{Action, ActionTx};

mod add_employee;
mod confirm_delete;
mod employee_home;
mod employees;
mod hr_home;
mod leave_form;
mod leave_review;
mod login;
mod manager_home;
mod payrolls;
mod reports;

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Login => login::handle_key(key, app),
        View::EmployeeHome => employee_home::handle_key(key, app, action_tx),
        View::ManagerHome => manager_home::handle_key(key, app, action_tx),
        View::HrHome => hr_home::handle_key(key, app, action_tx),
        View::Employees => employees::handle_key(key, app, action_tx),
        View::AddEmployee => add_employee::handle_key(key, app, action_tx),
        View::Payrolls => payrolls::handle_key(key, app, action_tx),
        View::LeaveForm => leave_form::handle_key(key, app, action_tx),
        View::LeaveReview => leave_review::handle_key(key, app, action_tx),
        View::Reports => reports::handle_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_key(key, app, action_tx),
    }
}

// Send failures only happen while the loop is shutting down.
fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}
