//! Run history kept in a small JSON file: newest first, capped length.
//!
//! Write-only from the pipeline's point of view. The parser never reads
//! it; it only exists so the editor can offer past scripts back.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MAX_ENTRIES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Raw script text, exactly as the author wrote it.
    pub code: String,
    /// Unix seconds; also the entry's identity for deletion.
    pub timestamp: i64,
}

pub struct History {
    path: PathBuf,
}

impl History {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All entries, newest first. A missing file is an empty history.
    pub fn list(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Reading {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Parsing history file {}", self.path.display()))
    }

    /// Prepends one run. Blank code is not worth keeping and is
    /// silently ignored; the oldest entries fall off past the cap.
    pub fn append(&self, code: &str, timestamp: i64) -> Result<()> {
        if code.trim().is_empty() {
            return Ok(());
        }

        let mut entries = self.list()?;
        entries.insert(
            0,
            HistoryEntry {
                code: code.to_string(),
                timestamp,
            },
        );
        entries.truncate(MAX_ENTRIES);
        self.save(&entries)
    }

    pub fn delete(&self, timestamp: i64) -> Result<()> {
        let mut entries = self.list()?;
        entries.retain(|e| e.timestamp != timestamp);
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Removing {}", self.path.display()))?;
        }
        Ok(())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).with_context(|| format!("Writing {}", self.path.display()))
    }
}
