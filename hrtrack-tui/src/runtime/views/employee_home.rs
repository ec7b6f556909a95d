use crossterm::event::{KeyCode, KeyEvent};
use hrtrack::domain::REQUEST_LEAVE_ROLES;

use crate::app::{App, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('i') => {
            if app.today_status.can_clock_in() {
                enqueue_action(action_tx, Action::ClockIn);
            } else {
                app.set_status("Already clocked in today");
            }
        }
        KeyCode::Char('o') => {
            if app.today_status.can_clock_out() {
                enqueue_action(action_tx, Action::ClockOut);
            } else {
                app.set_status("Nothing to clock out of");
            }
        }
        KeyCode::Char('b') => {
            // One key covers both directions of a break.
            if app.today_status.can_start_break() {
                enqueue_action(action_tx, Action::StartBreak);
            } else if app.today_status.can_end_break() {
                enqueue_action(action_tx, Action::EndBreak);
            } else {
                app.set_status("Breaks need an open workday");
            }
        }
        KeyCode::Char('l') => {
            if app.can_open(REQUEST_LEAVE_ROLES) {
                app.navigate_to(View::LeaveForm);
            }
        }
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadDashboard),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        _ => {}
    }
}
