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
        KeyCode::Tab => app.report_tab = app.report_tab.next(),
        KeyCode::Left | KeyCode::Char('[') | KeyCode::Char('h') => {
            app.step_report_month(false);
            enqueue_action(action_tx, Action::LoadReports);
        }
        KeyCode::Right | KeyCode::Char(']') | KeyCode::Char('l') => {
            app.step_report_month(true);
            enqueue_action(action_tx, Action::LoadReports);
        }
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadReports),
        _ => {}
    }
}
