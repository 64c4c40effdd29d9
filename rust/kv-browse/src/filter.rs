//! Key filtering.
//!
//! A filter turns the text typed into the search box into the ordered set of
//! keys to browse. The set is always recomputed from scratch; nothing from a
//! previous filter is reused.

use clap::ValueEnum;

use crate::{Key, KeyValueStore, KvBrowseError};

/// How the search text is matched against keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FilterMode {
    /// Keys that start with the text, found with a bounded range scan.
    #[default]
    Prefix,
    /// Keys that contain the text anywhere, found with a full scan.
    Substring,
}

/// The ordered, duplicate-free keys that matched a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredKeySet {
    keys: Vec<Key>,
}

impl FilteredKeySet {
    /// Number of matching keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All matching keys in ascending order
    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }
}

impl From<Vec<Key>> for FilteredKeySet {
    /// Builds a set from arbitrary keys, restoring ascending order.
    fn from(mut keys: Vec<Key>) -> Self {
        keys.sort();
        keys.dedup();
        Self { keys }
    }
}

/// Computes the set of keys in `store` matching `text` under `mode`.
///
/// An empty `text` matches every key. Any error reported by the underlying
/// scan aborts the whole computation.
pub fn filter_keys<S>(
    store: &S,
    text: &str,
    mode: FilterMode,
) -> Result<FilteredKeySet, KvBrowseError>
where
    S: KeyValueStore + ?Sized,
{
    let needle = text.as_bytes();

    let keys = match mode {
        FilterMode::Prefix => {
            let upper = prefix_successor(needle);
            store
                .scan_keys(needle, upper.as_deref())?
                .collect::<Result<Vec<_>, _>>()?
        }
        FilterMode::Substring => store
            .scan_keys(&[], None)?
            .filter(|key| key.as_ref().map_or(true, |key| key.contains(needle)))
            .collect::<Result<Vec<_>, _>>()?,
    };

    tracing::debug!(text, ?mode, matches = keys.len(), "Filtered keys");

    Ok(FilteredKeySet { keys })
}

/// The smallest key greater than every key starting with `prefix`.
///
/// Trailing `0xFF` bytes cannot be incremented so they are dropped before
/// the last remaining byte is incremented. Returns `None` when no such key
/// exists, i.e. the prefix is empty or made only of `0xFF` bytes, in which
/// case a prefix scan has no upper bound.
pub fn prefix_successor(prefix: &[u8]) -> Option<Vec<u8>> {
    let last = prefix.iter().rposition(|byte| *byte != 0xFF)?;
    let mut upper = prefix[..=last].to_vec();
    upper[last] += 1;
    Some(upper)
}
