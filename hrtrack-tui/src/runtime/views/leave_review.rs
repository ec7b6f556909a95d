use crossterm::event::{KeyCode, KeyEvent};
use hrtrack::domain::LeaveStatus;

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
        KeyCode::Char('a') => review_selected(app, action_tx, true),
        KeyCode::Char('x') => review_selected(app, action_tx, false),
        KeyCode::Char('R') => enqueue_action(action_tx, Action::LoadLeaveReview),
        _ => {}
    }
}

fn review_selected(app: &mut App, action_tx: &ActionTx, approve: bool) {
    let Some((id, status)) = app
        .selected_review_leave()
        .map(|l| (l.id.clone(), l.status))
    else {
        return;
    };

    if status != LeaveStatus::Pending {
        app.set_status("Request has already been reviewed");
        return;
    }

    let action = if approve {
        Action::ApproveLeave { id }
    } else {
        Action::RejectLeave { id }
    };
    enqueue_action(action_tx, action);
}
