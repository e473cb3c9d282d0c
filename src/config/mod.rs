use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    pub timeout: u64,
    pub retries: usize,
    pub concurrent_fetches: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: format!("unfurl/{}", env!("CARGO_PKG_VERSION")),
            timeout: 30,
            retries: 3,
            concurrent_fetches: 4,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }

    /// Loads a TOML file; keys left out fall back to the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
