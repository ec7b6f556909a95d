mod app;
mod backend;
mod bootstrap;
mod cli;
mod config;
mod demo;
mod login;
mod runtime;
mod session_store;
mod time_utils;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hrtrack::domain::Role;
use hrtrack::Session;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::backend::Backend;
use crate::cli::{Cli, Commands};
use crate::config::HrConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = HrConfig::load()?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let Some(session) = session_store::load_session()? else {
                println!("Not logged in. Run `hrtrack-tui login` first.");
                return Ok(());
            };
            let backend = Backend::remote(&config.api_url, session.clone());
            run_tui(session, backend).await?;
        }
        Commands::Dev { role } => {
            let (backend, session) = Backend::demo(&config.api_url, Role::from(role));
            run_tui(session, backend).await?;
        }
        Commands::Login => {
            login::run_login(&config.api_url).await?;
        }
        Commands::Logout => {
            session_store::clear_session()?;
            println!("Session removed.");
        }
        Commands::ConfigPath => {
            let path = HrConfig::config_path()?;
            if !path.exists() {
                config.save()?;
                println!("Created default config at {}", path.display());
            } else {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

async fn run_tui(session: Session, backend: Backend) -> Result<()> {
    let mut app = App::new(Some(session));
    bootstrap::initialize_app_state(&mut app, &backend).await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = runtime::run_app(&mut terminal, &mut app, &backend).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
