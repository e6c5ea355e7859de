//! Configuration loading and management
//!
//! Handles parsing of `taskdash.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Dashboard configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Store-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Override of the data directory holding the slot file
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Text of the task the store is seeded with when the slot is empty
    #[serde(default = "default_seed_text")]
    pub seed_text: String,
}

fn default_seed_text() -> String {
    "Add your first task".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: None,
            seed_text: default_seed_text(),
        }
    }
}

/// Dashboard-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Message shown in place of an empty task list
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "No tasks yet".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Load configuration from a `taskdash.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults when the
    /// file is missing. A present-but-invalid file is an error.
    pub fn load_or_default(dir: &Path) -> crate::error::Result<Self> {
        let path = dir.join("taskdash.toml");
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.store.seed_text.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "store.seed_text cannot be empty".to_string(),
            ));
        }
        if self.ui.placeholder.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "ui.placeholder cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
