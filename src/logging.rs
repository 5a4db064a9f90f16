//! Tracing setup.
//!
//! The game owns the terminal, so events go to a file. Nothing is recorded
//! unless a log file is configured or `HANGMAN_LOG` is set.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Environment variable holding a filter directive; overrides the config filter.
pub const LOG_ENV: &str = "HANGMAN_LOG";

/// Used when only `HANGMAN_LOG` asks for logging.
pub const DEFAULT_LOG_FILE: &str = "hangman.log";

/// Resolve where logs go, if anywhere.
pub fn log_target(cfg: &LogConfig, env_filter: Option<&str>) -> Option<PathBuf> {
    match (&cfg.file, env_filter) {
        (Some(file), _) => Some(file.clone()),
        (None, Some(_)) => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        (None, None) => None,
    }
}

/// Pick the filter directive: the environment wins over the config file.
pub fn build_filter(cfg: &LogConfig, env_filter: Option<&str>) -> Result<EnvFilter> {
    let directive = env_filter.unwrap_or(&cfg.filter);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter {directive:?}"))
}

/// Install the global subscriber. Returns the log file in use, if any.
pub fn init_logging(cfg: &LogConfig) -> Result<Option<PathBuf>> {
    let env_filter = std::env::var(LOG_ENV).ok();
    let Some(path) = log_target(cfg, env_filter.as_deref()) else {
        return Ok(None);
    };

    let filter = build_filter(cfg, env_filter.as_deref())?;
    let file = open_log(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    tracing::debug!(file = %path.display(), "logging started");
    Ok(Some(path))
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}
