//! Configuration management for zenity-dialogs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, ZenityError};
use crate::process::locate_binary;

/// Environment variable that overrides the zenity binary path
pub const BINARY_ENV: &str = "ZENITY_BINARY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZenityConfig {
    /// Explicit zenity path (PATH lookup when unset)
    pub binary: Option<PathBuf>,
    /// Output lines kept per dialog process
    pub max_history: usize,
    /// Options added to every dialog unless already set (e.g. `width`)
    pub defaults: BTreeMap<String, String>,
}

impl Default for ZenityConfig {
    fn default() -> Self {
        Self {
            binary: None,
            max_history: 100,
            defaults: BTreeMap::new(),
        }
    }
}

impl ZenityConfig {
    /// Get default configuration file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zenity-dialogs")
            .join("config.toml")
    }

    /// Load configuration from file, then apply the environment override
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content)
                .map_err(|e| ZenityError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Self::default()
        };

        if let Some(binary) = std::env::var_os(BINARY_ENV) {
            config.binary = Some(PathBuf::from(binary));
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ZenityError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Binary to launch: configured path, else PATH lookup
    pub fn resolve_binary(&self) -> PathBuf {
        self.binary.clone().unwrap_or_else(locate_binary)
    }
}
