use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use kv_browse::{
    DumpCli, LogConfig, LogTarget, RedbStore, dump_entries, init_logging, require_db_path,
};

pub fn main() -> Result<()> {
    let cli = DumpCli::parse();

    init_logging(LogConfig {
        level: &cli.log.log_level,
        target: LogTarget::Stderr,
    })?;

    let path = require_db_path(cli.db.as_deref())?;
    let store = RedbStore::open(path, &cli.table)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    dump_entries(&store, cli.prefix.as_deref().unwrap_or_default(), &mut out)
        .with_context(|| format!("Failed to dump {}", path.display()))?;
    out.flush()?;

    Ok(())
}
