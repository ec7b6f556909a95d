use std::{fs, path::PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for HrConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl HrConfig {
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("could not determine config directory")?
            .join("hrtrack-tui")
            .join("config.toml"))
    }

    /// Loads the config file, falling back to defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("could not read config at {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("could not parse config at {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(self).context("could not serialize config")?;
        fs::write(&path, raw).with_context(|| format!("could not write {}", path.display()))?;
        Ok(())
    }
}
