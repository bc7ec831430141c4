//! Configuration loading and management

mod io;

pub use io::write_config;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Project-local config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".scope-cheatsheet/lists.toml";

/// User-supplied spoken-form lists
///
/// ```toml
/// [lists.scope_type]
/// "funk" = "namedFunction"
/// "arg" = "argumentOrParameter"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListsConfig {
    /// List name -> (spoken form -> identifier)
    #[serde(default)]
    pub lists: HashMap<String, BTreeMap<String, String>>,
}

impl ListsConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ListsConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for: .scope-cheatsheet/lists.toml, otherwise no overrides
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(PROJECT_CONFIG_PATH);
        if path.exists() {
            return Self::from_file(&path);
        }
        Ok(Self::default())
    }

    /// Resolve the effective configuration.
    ///
    /// Precedence: explicit path, then the project directory, then the global
    /// config, then built-in lists only.
    pub fn load(explicit: Option<&Path>, work_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "Loading explicit list config");
            return Self::from_file(path);
        }

        let project = work_dir.join(PROJECT_CONFIG_PATH);
        if project.exists() {
            debug!(path = %project.display(), "Loading project list config");
            return Self::from_file(&project);
        }

        let global = Self::global_config_path();
        if global.exists() {
            debug!(path = %global.display(), "Loading global list config");
            return Self::from_file(&global);
        }

        Ok(Self::default())
    }

    /// Path of the project config under `work_dir`
    pub fn project_config_path(work_dir: &Path) -> PathBuf {
        work_dir.join(PROJECT_CONFIG_PATH)
    }
}
