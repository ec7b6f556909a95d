use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use hrtrack::Session;

fn root_path() -> anyhow::Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("could not determine config directory")?
        .join("hrtrack-tui"))
}

fn session_path() -> anyhow::Result<PathBuf> {
    Ok(root_path()?.join("session.json"))
}

#[cfg(unix)]
fn secure_write(path: &Path, contents: &str) -> anyhow::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .with_context(|| format!("could not open {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn secure_write(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("could not write {}", path.display()))?;
    Ok(())
}

pub fn save_session(session: &Session) -> anyhow::Result<()> {
    let path = session_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("could not create {}", parent.display()))?;
    }

    let raw = serde_json::to_string(session).context("could not serialize session")?;
    secure_write(&path, &raw)
}

/// Loads the stored session, if any. A corrupt session file is treated
/// as missing so the user lands on the login path instead of an error.
pub fn load_session() -> anyhow::Result<Option<Session>> {
    let path = session_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path.display()))?;
    Ok(serde_json::from_str(&raw).ok())
}

pub fn clear_session() -> anyhow::Result<()> {
    let path = session_path()?;
    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("could not remove {}", path.display()))?;
    }
    Ok(())
}
