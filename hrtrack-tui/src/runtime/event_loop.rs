use crate::app::App;
use crate::backend::Backend;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: &Backend,
) -> Result<()> {
    // Show throbber for at least 3 seconds on startup.
    app.is_loading = true;
    let loading_until = Instant::now() + Duration::from_secs(3);

    // Background polling: refresh dashboard data every 60 seconds.
    let mut last_refresh = Instant::now();
    const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
            if Instant::now() >= loading_until {
                app.is_loading = false;
            }
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        if last_refresh.elapsed() >= REFRESH_INTERVAL && !app.is_in_edit_mode() {
            let _ = action_tx.send(Action::RefreshBackground);
            last_refresh = Instant::now();
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, backend).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
