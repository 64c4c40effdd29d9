//! Store access layer for the browser.
//!
//! The browser never writes. It needs exactly two capabilities from a store:
//! point lookups by key and ordered scans over a half-open key range. Both
//! are expressed by [`KeyValueStore`]; the store is closed when dropped.

use crate::KvBrowseError;

mod key;
pub use key::*;

mod memory;
pub use memory::*;

mod redb_store;
pub use redb_store::*;

/// A lazy, finite, non-restartable sequence yielded by a range scan.
pub type Scan<'a, T> = Box<dyn Iterator<Item = Result<T, KvBrowseError>> + 'a>;

/// A key/value pair materialized from a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The entry's key
    pub key: Key,
    /// The raw value bytes
    pub value: Vec<u8>,
}

/// Read access to an ordered key-value store.
///
/// Keys are ordered byte-lexicographically and every scan yields them in
/// ascending order.
pub trait KeyValueStore {
    /// Looks up the value stored under `key`.
    ///
    /// Returns [`KvBrowseError::NotFound`] when the key is absent.
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, KvBrowseError>;

    /// Scans entries with `lower <= key < upper`, or `lower <= key` when
    /// `upper` is `None`.
    fn scan(&self, lower: &[u8], upper: Option<&[u8]>) -> Result<Scan<'_, Entry>, KvBrowseError>;

    /// Scans only the keys of the same range as [`KeyValueStore::scan`].
    ///
    /// Backends that can avoid copying values should override this.
    fn scan_keys(
        &self,
        lower: &[u8],
        upper: Option<&[u8]>,
    ) -> Result<Scan<'_, Key>, KvBrowseError> {
        Ok(Box::new(
            self.scan(lower, upper)?
                .map(|entry| entry.map(|entry| entry.key)),
        ))
    }
}

/// True when the bounds describe a range that can hold no key.
pub(crate) fn is_empty_range(lower: &[u8], upper: Option<&[u8]>) -> bool {
    upper.is_some_and(|upper| upper <= lower)
}
