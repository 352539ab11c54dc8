use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{SwimlaneError, SwimlaneResult};

/// User settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Start every drag session with gestures ignored.
    #[serde(default)]
    pub disabled: bool,
    /// Pretty-print JSON written by the command-line tool.
    #[serde(default)]
    pub pretty_output: bool,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/swimlane/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("swimlane/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("swimlane\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> SwimlaneResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> SwimlaneResult<Self> {
        toml::from_str(content).map_err(|e| SwimlaneError::Config(e.to_string()))
    }
}
