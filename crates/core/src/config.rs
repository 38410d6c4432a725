//! Launcher configuration.

use std::path::PathBuf;

use crate::types::{MIN_TICK_MS, TICK_MS};

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "tui-arcade.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Frame interval in milliseconds.
    pub tick_ms: u32,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
    /// Log destination; `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// Game selected right after startup.
    pub start_game: Option<String>,
    pub mouse: bool,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            log_filter: "info".to_string(),
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            start_game: None,
            mouse: true,
        }
    }
}

impl LauncherConfig {
    /// Create from `ARCADE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("ARCADE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_TICK_MS))
            .unwrap_or(defaults.tick_ms);

        let log_filter = lookup("ARCADE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        // Set but empty means "no log file".
        let log_path = match lookup("ARCADE_LOG_PATH") {
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(PathBuf::from(s.trim())),
            None => defaults.log_path,
        };

        let start_game = lookup("ARCADE_START_GAME")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mouse = !lookup("ARCADE_NO_MOUSE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            tick_ms,
            log_filter,
            log_path,
            start_game,
            mouse,
        }
    }
}
