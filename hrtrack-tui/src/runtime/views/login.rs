use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

pub(super) fn handle_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
