use std::path::{Path, PathBuf};

use clap::{Args, Parser};

use crate::{FilterMode, KvBrowseError};

/// Name of the table read when `--table` is not given.
pub const DEFAULT_TABLE: &str = "kv";

/// Command line options of the interactive browser.
#[derive(Debug, Parser)]
#[command(name = "kv-browse")]
#[command(bin_name = "kv-browse")]
#[command(about = "Browse the keys and values of an ordered key-value store", long_about = None)]
pub struct BrowseCli {
    /// Path to the redb database file
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// How the search text is matched against keys
    #[arg(long, value_enum, default_value_t = FilterMode::Prefix)]
    pub mode: FilterMode,

    /// Table holding the key/value pairs
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Write logs to this file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Logging options
    #[command(flatten)]
    pub log: LogArgs,
}

/// Command line options of the dump tool.
#[derive(Debug, Parser)]
#[command(name = "kv-dump")]
#[command(bin_name = "kv-dump")]
#[command(about = "Print the key/value pairs of an ordered key-value store", long_about = None)]
pub struct DumpCli {
    /// Path to the redb database file
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Only print keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Table holding the key/value pairs
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Logging options
    #[command(flatten)]
    pub log: LogArgs,
}

/// Logging options shared by both tools.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Log filter directive, e.g. `info` or `kv_browse=debug`
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Rejects an absent or empty `--db` value.
pub fn require_db_path(path: Option<&Path>) -> Result<&Path, KvBrowseError> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => Ok(path),
        _ => Err(KvBrowseError::EmptyPath),
    }
}
