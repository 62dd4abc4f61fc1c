//! Best-score persistence.
//!
//! The file holds a single JSON object, `{"best_score": 1200}`. A missing or
//! unreadable file counts as a best score of 0; it is never an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

const APP_DIR: &str = "blockfall";
const FILE_NAME: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    best_score: u32,
}

/// `$XDG_CONFIG_HOME/blockfall/highscore.json`, falling back to
/// `$HOME/.config`, then the working directory.
pub fn default_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join(FILE_NAME)
}

/// Read the stored best score.
pub fn load(path: &Path) -> u32 {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no stored high score");
            return 0;
        }
    };
    match serde_json::from_str::<Record>(&text) {
        Ok(record) => record.best_score,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring corrupt high score file");
            0
        }
    }
}

/// Write `best_score`, creating parent directories as needed.
pub fn save(path: &Path, best_score: u32) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(&Record { best_score })?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// In-memory best score backed by an optional file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: Option<PathBuf>,
    best: u32,
}

impl HighScoreStore {
    /// Open the store at `path`, or keep scores in memory only when `None`.
    pub fn open(path: Option<PathBuf>) -> Self {
        let best = path.as_deref().map(load).unwrap_or(0);
        Self { path, best }
    }

    pub fn in_memory() -> Self {
        Self::open(None)
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Offer a finished game's score. Returns `true` (and persists) only when
    /// it beats the stored best.
    pub fn record(&mut self, final_score: u32) -> Result<bool> {
        if final_score <= self.best {
            return Ok(false);
        }
        self.best = final_score;
        if let Some(path) = &self.path {
            save(path, final_score)?;
        }
        info!(best_score = final_score, "new high score");
        Ok(true)
    }
}
