use std::{collections::VecDeque, ops::Bound, path::Path};

use redb::{Database, ReadOnlyTable, TableDefinition, TableError};

use crate::{Entry, Key, KeyValueStore, KvBrowseError, Scan, is_empty_range};

type BytesTable = ReadOnlyTable<&'static [u8], &'static [u8]>;

/// Entries pulled from the table per range query while scanning.
const SCAN_BATCH_SIZE: usize = 1024;

/// A [`KeyValueStore`] backed by a redb database file.
///
/// `--db` names a single redb file, not a LevelDB directory.
/// The file is opened, never created, and only read transactions are ever
/// started against it. All entries are read from a single table of raw byte
/// keys and values. The file lock is released when the store is dropped.
pub struct RedbStore {
    db: Database,
    table: String,
}

impl RedbStore {
    /// Opens the existing database at `path`, reading entries from `table`.
    pub fn open(path: &Path, table: &str) -> Result<Self, KvBrowseError> {
        if path.as_os_str().is_empty() {
            return Err(KvBrowseError::EmptyPath);
        }

        let db = Database::open(path).map_err(|error| KvBrowseError::Open {
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;

        tracing::info!(path = %path.display(), table, "Opened store");

        Ok(Self {
            db,
            table: table.to_owned(),
        })
    }

    /// Name of the table entries are read from
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Opens the entry table in a fresh read transaction.
    ///
    /// A table that was never written to yields `None` so that it reads as
    /// an empty store.
    fn read_table(
        &self,
        map_error: fn(String) -> KvBrowseError,
    ) -> Result<Option<BytesTable>, KvBrowseError> {
        let definition: TableDefinition<'_, &'static [u8], &'static [u8]> =
            TableDefinition::new(&self.table);
        let transaction = self
            .db
            .begin_read()
            .map_err(|error| map_error(error.to_string()))?;

        match transaction.open_table(definition) {
            Ok(table) => Ok(Some(table)),
            Err(TableError::TableDoesNotExist(_)) => Ok(None),
            Err(error) => Err(map_error(error.to_string())),
        }
    }

    fn scan_with<T: 'static>(
        &self,
        lower: &[u8],
        upper: Option<&[u8]>,
        project: fn(&[u8], &[u8]) -> T,
    ) -> Result<Scan<'_, T>, KvBrowseError> {
        if is_empty_range(lower, upper) {
            return Ok(Box::new(std::iter::empty()));
        }

        let Some(table) = self.read_table(KvBrowseError::Scan)? else {
            return Ok(Box::new(std::iter::empty()));
        };

        Ok(Box::new(RedbScan {
            table,
            lower: Bound::Included(lower.to_vec()),
            upper: upper.map(<[u8]>::to_vec),
            buffer: VecDeque::new(),
            project,
            finished: false,
        }))
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, KvBrowseError> {
        let not_found = || KvBrowseError::NotFound(String::from_utf8_lossy(key).into_owned());

        let Some(table) = self.read_table(KvBrowseError::Lookup)? else {
            return Err(not_found());
        };

        match table.get(key) {
            Ok(Some(value)) => Ok(value.value().to_vec()),
            Ok(None) => Err(not_found()),
            Err(error) => Err(KvBrowseError::Lookup(error.to_string())),
        }
    }

    fn scan(&self, lower: &[u8], upper: Option<&[u8]>) -> Result<Scan<'_, Entry>, KvBrowseError> {
        self.scan_with(lower, upper, |key, value| Entry {
            key: Key::from(key),
            value: value.to_vec(),
        })
    }

    fn scan_keys(
        &self,
        lower: &[u8],
        upper: Option<&[u8]>,
    ) -> Result<Scan<'_, Key>, KvBrowseError> {
        self.scan_with(lower, upper, |key, _| Key::from(key))
    }
}

/// Lazily walks a key range of one read snapshot.
///
/// Entries are pulled in batches; each batch resumes strictly after the last
/// key of the previous one, so the table is never borrowed across calls.
struct RedbScan<T> {
    table: BytesTable,
    lower: Bound<Vec<u8>>,
    upper: Option<Vec<u8>>,
    buffer: VecDeque<T>,
    project: fn(&[u8], &[u8]) -> T,
    finished: bool,
}

impl<T> RedbScan<T> {
    fn refill(&mut self) -> Result<(), KvBrowseError> {
        let lower = self.lower.as_ref().map(Vec::as_slice);
        let upper = self
            .upper
            .as_deref()
            .map_or(Bound::Unbounded, Bound::Excluded);

        let range = self
            .table
            .range::<&[u8]>((lower, upper))
            .map_err(|error| KvBrowseError::Scan(error.to_string()))?;

        let mut last_key = None;
        let mut pulled = 0;

        for item in range.take(SCAN_BATCH_SIZE) {
            let (key, value) = item.map_err(|error| KvBrowseError::Scan(error.to_string()))?;
            self.buffer
                .push_back((self.project)(key.value(), value.value()));
            last_key = Some(key.value().to_vec());
            pulled += 1;
        }

        match last_key {
            Some(key) if pulled == SCAN_BATCH_SIZE => self.lower = Bound::Excluded(key),
            _ => self.finished = true,
        }

        Ok(())
    }
}

impl<T> Iterator for RedbScan<T> {
    type Item = Result<T, KvBrowseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.finished {
            if let Err(error) = self.refill() {
                self.finished = true;
                self.buffer.clear();
                return Some(Err(error));
            }
        }

        self.buffer.pop_front().map(Ok)
    }
}
