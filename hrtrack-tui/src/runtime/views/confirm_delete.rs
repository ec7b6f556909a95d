use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            enqueue_action(action_tx, Action::DeleteEmployee);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.delete_target = None;
            app.current_view = View::Employees;
        }
        _ => {}
    }
}
