use std::io::Write;

use crate::{KeyValueStore, KvBrowseError, prefix_successor};

/// Writes every entry whose key starts with `prefix` to `out`.
///
/// Entries are written in ascending key order, one per line, as
/// `Key: <key>, Value: <value>`. Keys and values are written as raw bytes.
/// Returns the number of entries written; a scan error stops the dump.
pub fn dump_entries<S, W>(store: &S, prefix: &str, out: &mut W) -> Result<usize, KvBrowseError>
where
    S: KeyValueStore + ?Sized,
    W: Write,
{
    let lower = prefix.as_bytes();
    let upper = prefix_successor(lower);

    let mut count = 0;

    for entry in store.scan(lower, upper.as_deref())? {
        let entry = entry?;

        out.write_all(b"Key: ")?;
        out.write_all(entry.key.as_bytes())?;
        out.write_all(b", Value: ")?;
        out.write_all(&entry.value)?;
        out.write_all(b"\n")?;

        count += 1;
    }

    tracing::info!(prefix, count, "Dumped entries");

    Ok(count)
}
