//! File logging for the TUI
//!
//! The terminal belongs to the UI, so events only go to a daily-rolling file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::DEFAULT_LOG_FILTER;

pub const LOG_FILE_NAME: &str = "admindash.log";

/// Pick the filter directive: CLI flag, then `RUST_LOG`, then config.
pub fn filter_directive(cli: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

/// Install the global subscriber. The returned guard must live until exit so
/// buffered lines are flushed.
pub fn init(log_dir: Option<PathBuf>, directive: &str) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(directive)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .context("invalid log filter")?;

    let Some(dir) = log_dir else {
        eprintln!("Warning: no log directory available, logging disabled");
        return Ok(None);
    };

    let dir = match ensure_dir(&dir) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("Warning: {err:#}, logging disabled");
            return Ok(None);
        }
    };

    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(Some(guard))
}
