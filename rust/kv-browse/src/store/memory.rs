use std::{collections::BTreeMap, ops::Bound};

use crate::{Entry, Key, KeyValueStore, KvBrowseError, Scan, is_empty_range};

/// An ordered store held entirely in memory.
///
/// Useful for embedding the browser over data that is not on disk, and as a
/// stand-in for a real store in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, KvBrowseError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| KvBrowseError::NotFound(String::from_utf8_lossy(key).into_owned()))
    }

    fn scan(&self, lower: &[u8], upper: Option<&[u8]>) -> Result<Scan<'_, Entry>, KvBrowseError> {
        if is_empty_range(lower, upper) {
            return Ok(Box::new(std::iter::empty()));
        }

        let upper = upper.map_or(Bound::Unbounded, Bound::Excluded);

        Ok(Box::new(
            self.entries
                .range::<[u8], _>((Bound::Included(lower), upper))
                .map(|(key, value)| {
                    Ok(Entry {
                        key: Key::from(key.as_slice()),
                        value: value.clone(),
                    })
                }),
        ))
    }
}
