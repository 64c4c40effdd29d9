use std::path::Path;

use kv_browse::{
    BrowseState, FilterMode, Key, KeyValueStore, KvBrowseError, RedbStore, ValueView,
    dump_entries, filter_keys,
};
use pretty_assertions::assert_eq;
use redb::{Database, TableDefinition};
use tempfile::TempDir;
use testresult::TestResult;

const TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("kv");

type Fallible<T> = Result<T, Box<dyn std::error::Error>>;

fn write_store<K, V>(path: &Path, entries: &[(K, V)]) -> Fallible<()>
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let db = Database::create(path)?;
    let transaction = db.begin_write()?;
    {
        let mut table = transaction.open_table(TABLE)?;
        for (key, value) in entries {
            table.insert(key.as_ref(), value.as_ref())?;
        }
    }
    transaction.commit()?;
    Ok(())
}

/// Writes `entries` to a fresh database file and opens it for browsing.
fn fixture<K, V>(entries: &[(K, V)]) -> Fallible<(TempDir, RedbStore)>
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("store.redb");
    write_store(&path, entries)?;
    let store = RedbStore::open(&path, "kv")?;
    Ok((directory, store))
}

fn names(keys: &[Key]) -> Vec<String> {
    keys.iter().map(Key::to_string).collect()
}

#[test]
fn it_filters_a_redb_store_by_prefix() -> TestResult {
    let (_directory, store) = fixture(&[("a1", "x"), ("a2", "y"), ("b1", "z")])?;

    let set = filter_keys(&store, "a", FilterMode::Prefix)?;
    assert_eq!(names(set.as_slice()), vec!["a1", "a2"]);

    let set = filter_keys(&store, "", FilterMode::Prefix)?;
    assert_eq!(names(set.as_slice()), vec!["a1", "a2", "b1"]);

    let set = filter_keys(&store, "1", FilterMode::Substring)?;
    assert_eq!(names(set.as_slice()), vec!["a1", "b1"]);
    Ok(())
}

#[test]
fn it_scans_across_many_batches() -> TestResult {
    let entries = (0..2500)
        .map(|index| (format!("item:{index:05}"), "v"))
        .collect::<Vec<_>>();
    let (_directory, store) = fixture(&entries)?;

    let set = filter_keys(&store, "item:", FilterMode::Prefix)?;
    assert_eq!(set.len(), 2500);
    assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));

    let set = filter_keys(&store, "item:01", FilterMode::Prefix)?;
    assert_eq!(set.len(), 1000);

    let entries = store
        .scan(b"item:02490", None)?
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].value, b"v".to_vec());
    Ok(())
}

#[test]
fn it_looks_up_values() -> TestResult {
    let (_directory, store) = fixture(&[("config:theme", "dark")])?;

    assert_eq!(store.get(b"config:theme")?, b"dark".to_vec());
    assert!(matches!(
        store.get(b"config:font"),
        Err(KvBrowseError::NotFound(_))
    ));
    Ok(())
}

#[test]
fn it_reads_a_missing_table_as_empty() -> TestResult {
    let (directory, store) = fixture(&[("a", "1")])?;
    drop(store);

    let store = RedbStore::open(&directory.path().join("store.redb"), "other")?;

    assert_eq!(store.table_name(), "other");
    assert!(filter_keys(&store, "", FilterMode::Prefix)?.is_empty());
    assert!(matches!(store.get(b"a"), Err(KvBrowseError::NotFound(_))));
    Ok(())
}

#[test]
fn it_refuses_to_open_what_is_not_there() -> TestResult {
    let directory = tempfile::tempdir()?;

    assert!(matches!(
        RedbStore::open(&directory.path().join("missing.redb"), "kv"),
        Err(KvBrowseError::Open { .. })
    ));
    assert!(matches!(
        RedbStore::open(Path::new(""), "kv"),
        Err(KvBrowseError::EmptyPath)
    ));
    Ok(())
}

#[test]
fn it_dumps_a_redb_store() -> TestResult {
    let (_directory, store) = fixture(&[
        ("user:2", "grace"),
        ("user:1", "ada"),
        ("session:9", "open"),
    ])?;
    let mut out = Vec::new();

    assert_eq!(dump_entries(&store, "user:", &mut out)?, 2);
    assert_eq!(
        String::from_utf8(out)?,
        "Key: user:1, Value: ada\nKey: user:2, Value: grace\n"
    );
    Ok(())
}

#[test]
fn it_browses_a_redb_store() -> TestResult {
    let (_directory, store) = fixture(&[("a", "apple"), ("b", "banana")])?;
    let mut state = BrowseState::new(store, FilterMode::Prefix);

    state.select();

    assert_eq!(
        state.value,
        ValueView::Entry {
            key: Key::from("a"),
            value: b"apple".to_vec(),
        }
    );
    Ok(())
}
