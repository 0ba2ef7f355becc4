use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional user configuration, loaded from `~/.cachesweep/config.toml`.
/// A missing file means defaults; a malformed file is an error the user
/// should see, not something to silently paper over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Event log target used when `--log` is not given
    #[serde(default)]
    pub log_file: Option<String>,

    /// Disable colored output by default
    #[serde(default)]
    pub no_color: bool,

    /// Module ids that are always skipped
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// The cachesweep data directory (~/.cachesweep)
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".cachesweep")
    }

    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Load config from file, or defaults if the file does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Is a module excluded by configuration?
    pub fn is_excluded(&self, id: &str) -> bool {
        self.exclude.iter().any(|e| e == id)
    }
}
