use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::action_queue::{Action, ActionTx};
use crate::runtime::views::enqueue_action;

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Esc => {
            let home = app.home_view();
            app.navigate_to(home);
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadPayrolls),
        _ => {}
    }
}
