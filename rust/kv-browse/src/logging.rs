//! Tracing setup shared by the `kv-browse` and `kv-dump` binaries.

use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for non-interactive binaries
    Stderr,
    /// Appended to a file, for the TUI which owns the terminal
    File(PathBuf),
    /// Logging is disabled
    Discard,
}

/// Logging configuration shared by the binaries.
pub struct LogConfig<'a> {
    /// An [`EnvFilter`] directive such as `warn` or `kv_browse=debug`
    pub level: &'a str,
    /// Destination for formatted events
    pub target: LogTarget,
}

/// Installs the global tracing subscriber described by `config`.
pub fn init_logging(config: LogConfig<'_>) -> Result<()> {
    let filter = EnvFilter::try_new(config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let (writer, ansi) = match config.target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .try_init()
        .map_err(|error| anyhow!(error))
}
