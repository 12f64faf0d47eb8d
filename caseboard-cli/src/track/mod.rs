//! Completion-state persistence for the done/not-done tracker
//!
//! The completion set lives with the host, not the pipeline: a JSON file
//! under the user data directory, keyed by schedule file path. The pipeline
//! only ever receives the set as input for remaining-count math.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion sets for all tracked schedule files
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CompletionStore {
    #[serde(default)]
    files: HashMap<String, FileCompletion>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileCompletion {
    rows: BTreeSet<usize>,
    updated_at: Option<DateTime<Utc>>,
}

impl CompletionStore {
    /// Stable key for a schedule file (canonicalized when possible)
    pub fn file_key(path: &Path) -> String {
        std::fs::canonicalize(path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    }

    fn store_path() -> Result<PathBuf> {
        let dir = dirs::data_dir().context("No user data directory available")?;
        Ok(dir.join("caseboard").join("completed.json"))
    }

    /// Load the store, starting empty when no file exists yet
    pub fn load() -> Result<Self> {
        let path = Self::store_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read completion state: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid completion state: {}", path.display()))
    }

    /// Persist the store
    pub fn save(&self) -> Result<()> {
        let path = Self::store_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to encode state")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write completion state: {}", path.display()))?;
        log::debug!("Completion state saved to {}", path.display());
        Ok(())
    }

    /// Completed row positions for one schedule file
    pub fn completed(&self, key: &str) -> HashSet<usize> {
        self.files
            .get(key)
            .map(|f| f.rows.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Mark a row done; false if it was already marked
    pub fn mark_done(&mut self, key: &str, row: usize) -> bool {
        let entry = self.files.entry(key.to_string()).or_default();
        let inserted = entry.rows.insert(row);
        if inserted {
            entry.updated_at = Some(Utc::now());
        }
        inserted
    }

    /// Clear all completion state for one schedule file, returning how many
    /// rows were marked
    pub fn reset(&mut self, key: &str) -> usize {
        self.files.remove(key).map(|f| f.rows.len()).unwrap_or(0)
    }
}
