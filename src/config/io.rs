//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::ListsConfig;

impl ListsConfig {
    /// Get the global config directory path (~/.scope-cheatsheet/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".scope-cheatsheet")
    }

    /// Get the global config file path (~/.scope-cheatsheet/lists.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("lists.toml")
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config(path, &content)
    }
}

/// Write raw config text, creating parent directories as needed
pub fn write_config(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}
