//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence; otherwise verbosity picks the level for this crate.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("activity_suggester={}", level_for_verbosity(verbosity)))
    })
}

/// Log to stderr (one-shot commands)
pub fn init_stderr(verbosity: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Log to a file so output cannot overwrite the terminal UI
///
/// The returned guard must stay alive for buffered lines to be flushed.
pub fn init_file(verbosity: u8, log_file: &Path) -> Result<WorkerGuard> {
    let dir = log_file.parent().context("Log file has no parent directory")?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let file_name = log_file.file_name().context("Log file has no file name")?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
