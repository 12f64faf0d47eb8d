//! User configuration file
//!
//! Optional TOML file under the user config directory; a missing file means
//! defaults, a malformed one is an error. Command-line flags override
//! whatever is configured here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::services::classify::DEFAULT_FUZZY_THRESHOLD;
use crate::services::summary::DEFAULT_REVIEW_LIMIT;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub classify: ClassifySection,
    pub review: ReviewSection,
}

/// `[classify]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifySection {
    pub use_fuzzy: bool,
    pub fuzzy_threshold: u8,
}

impl Default for ClassifySection {
    fn default() -> Self {
        Self {
            use_fuzzy: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

/// `[review]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReviewSection {
    pub limit: usize,
}

impl Default for ReviewSection {
    fn default() -> Self {
        Self {
            limit: DEFAULT_REVIEW_LIMIT,
        }
    }
}

impl Config {
    /// Where the config file lives, if a config directory exists at all
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("caseboard").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
