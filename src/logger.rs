//! File-based tracing setup.
//!
//! Stdout belongs to the spinner line, so log events are written to a
//! daily-rolling file under the state directory instead of the terminal.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "LINESPIN_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Default log directory: `$XDG_STATE_HOME/linespin`, else `~/.local/state/linespin`.
pub fn default_log_dir() -> Result<PathBuf> {
    if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(state_home).join("linespin"));
    }

    if let Some(home_dir) = home::home_dir() {
        return Ok(home_dir.join(".local/state/linespin"));
    }

    anyhow::bail!("Could not determine state directory")
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered events are flushed.
pub fn init(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir).context("Failed to create log directory")?;

    let appender = tracing_appender::rolling::daily(log_dir, "linespin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .ok();

    Ok(guard)
}
