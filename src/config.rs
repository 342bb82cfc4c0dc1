//! Runner configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `TUI2048_SIZE` | 4 | Board side length |
//! | `TUI2048_SEED` | time-based | Seed for tile placement |
//! | `TUI2048_DEBOUNCE_MS` | 100 | Trailing-edge debounce window |
//! | `TUI2048_LOG_PATH` | unset | Log file; logging is off when unset |
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_BOARD_SIZE, DEFAULT_DEBOUNCE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub board_size: usize,
    pub seed: Option<u32>,
    pub debounce_ms: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_path: None,
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let board_size = lookup("TUI2048_SIZE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.board_size);

        let seed = lookup("TUI2048_SEED").and_then(|s| s.trim().parse().ok());

        let debounce_ms = lookup("TUI2048_DEBOUNCE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.debounce_ms);

        let log_path = lookup("TUI2048_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            board_size,
            seed,
            debounce_ms,
            log_path,
        }
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
