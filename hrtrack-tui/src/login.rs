use std::io::{self, Write};

use anyhow::{bail, Context};
use hrtrack::{FetchError, Session};

use crate::session_store;

/// Prompts for credentials, signs in against the backend and stores the
/// session on disk for later `run` invocations.
pub async fn run_login(api_url: &str) -> anyhow::Result<Session> {
    print!("Email: ");
    io::stdout().flush()?;
    let mut email = String::new();
    io::stdin()
        .read_line(&mut email)
        .context("could not read email")?;
    let email = email.trim();
    if email.is_empty() {
        bail!("no email given");
    }

    let password = rpassword::prompt_password("Password: ").context("could not read password")?;

    let session = match Session::login(api_url, email, &password).await {
        Ok(session) => session,
        Err(FetchError::Unauthorized) => bail!("invalid email or password"),
        Err(e) => bail!("login failed: {}", e),
    };

    session_store::save_session(&session)?;
    println!("Logged in as {} ({})", session.user.name, session.user.role);

    Ok(session)
}
