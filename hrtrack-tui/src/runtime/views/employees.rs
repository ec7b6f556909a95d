use crossterm::event::{KeyCode, KeyEvent};
use hrtrack::domain::ADD_EMPLOYEE_ROLES;

use crate::app::{App, View};
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

/// Tab moves between the search box and the result list, like every
/// selection view in the app.
pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.employee_list_focused {
        handle_list_key(key, app, action_tx);
    } else {
        handle_search_key(key, app);
    }
}

fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc => {
            let home = app.home_view();
            app.navigate_to(home);
        }
        KeyCode::Tab => app.employee_list_focused = false,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('a') => {
            if app.can_open(ADD_EMPLOYEE_ROLES) {
                app.navigate_to(View::AddEmployee);
            }
        }
        KeyCode::Char('d') => app.enter_delete_confirm(),
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadEmployees),
        _ => {}
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            let home = app.home_view();
            app.navigate_to(home);
        }
        KeyCode::Tab | KeyCode::Enter => app.employee_list_focused = true,
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Left => app.employee_search_input.move_left(),
        KeyCode::Right => app.employee_search_input.move_right(),
        KeyCode::Home => app.employee_search_input.home(),
        KeyCode::End => app.employee_search_input.end(),
        KeyCode::Backspace => {
            app.employee_search_input.backspace();
            app.filter_employees();
        }
        KeyCode::Char(c) => {
            app.employee_search_input.insert(c);
            app.filter_employees();
        }
        _ => {}
    }
}
