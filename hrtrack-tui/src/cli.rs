use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "hrtrack-tui")]
#[command(about = "Terminal dashboard for the HRTrack workforce backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the dashboard against a real HRTrack server (default)
    Run,
    /// Run in demo mode with a local in-memory backend, no server needed
    Dev {
        /// Role to explore the demo as: employee, manager or hr
        #[arg(long, default_value = "employee")]
        role: String,
    },
    /// Sign in with email and password and store the session locally
    Login,
    /// Remove the locally stored session
    Logout,
    /// Print the path to the config file, creating a default one if missing
    ConfigPath,
}
