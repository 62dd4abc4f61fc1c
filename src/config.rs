//! Command-line configuration.
//!
//! Every flag except `--no-high-score` can also come from a `BLOCKFALL_*`
//! environment variable.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::core::StdRandom;
use crate::highscore;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Config {
    /// Seed for a reproducible piece sequence (default: OS entropy)
    #[arg(long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u64>,

    /// Where the best score is kept
    #[arg(long, env = "BLOCKFALL_HIGH_SCORE_FILE", value_name = "PATH")]
    pub high_score_file: Option<PathBuf>,

    /// Do not read or write a best score (wins over a configured file)
    #[arg(long)]
    pub no_high_score: bool,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "BLOCKFALL_LOG", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Config {
    /// Resolved high-score location, `None` when persistence is off.
    pub fn high_score_path(&self) -> Option<PathBuf> {
        if self.no_high_score {
            return None;
        }
        Some(
            self.high_score_file
                .clone()
                .unwrap_or_else(highscore::default_path),
        )
    }

    pub fn random_source(&self) -> StdRandom {
        match self.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        }
    }
}
