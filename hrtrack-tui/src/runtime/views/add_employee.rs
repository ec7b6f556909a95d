use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, EmployeeFormField, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Esc {
        app.navigate_to(View::Employees);
        return;
    }

    let form = &mut app.employee_form;
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitEmployee),
        KeyCode::Tab | KeyCode::Down => form.focused_field = form.focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => form.focused_field = form.focused_field.prev(),
        KeyCode::Left => {
            if form.focused_field == EmployeeFormField::Role {
                form.cycle_role(false);
            } else if let Some(input) = form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if form.focused_field == EmployeeFormField::Role {
                form.cycle_role(true);
            } else if let Some(input) = form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.home();
            }
        }
        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.end();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
            form.error = None;
        }
        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input() {
                input.insert(c);
                form.error = None;
            }
        }
        _ => {}
    }
}
