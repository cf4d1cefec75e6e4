//! Synchronous string key-value storage.
//!
//! Mirrors the semantics of browser `localStorage`: string keys, string
//! values, every write lands before the call returns, and an optional byte
//! quota rejects writes that would grow the store past its limit.

use crate::persistence::files::{atomic_write, read_file};
use log::warn;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to persist a value
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage quota exceeded ({needed} of {quota} bytes)")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("storage write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A local, synchronous key-value store
pub trait KeyValueStore {
    /// Read the raw value stored under `key`
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write several entries as one unit. Either all land or none do.
    fn set_items(&mut self, items: &[(&str, String)]) -> Result<(), StoreError>;

    fn set_item(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.set_items(&[(key, value)])
    }
}

/// Byte usage of a set of entries, counted as key + value lengths
fn usage(entries: &BTreeMap<String, String>) -> usize {
    entries.iter().map(|(k, v)| k.len() + v.len()).sum()
}

/// Apply `items` to a copy of `entries` and enforce the quota on the result
fn staged(
    entries: &BTreeMap<String, String>,
    items: &[(&str, String)],
    quota: Option<usize>,
) -> Result<BTreeMap<String, String>, StoreError> {
    let mut next = entries.clone();
    for (key, value) in items {
        next.insert((*key).to_string(), value.clone());
    }

    if let Some(quota) = quota {
        let needed = usage(&next);
        if needed > quota {
            return Err(StoreError::QuotaExceeded { needed, quota });
        }
    }

    Ok(next)
}

/// Key-value store backed by a single JSON object file
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl FileKvStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open<P: AsRef<Path>>(path: P, quota: Option<usize>) -> Self {
        let path = path.as_ref().to_path_buf();

        let entries = match read_file(&path) {
            Ok(Some(content)) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(
                        "event=kv_open status=corrupt path={} error={}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!(
                    "event=kv_open status=unreadable path={} error={}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries,
            quota,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileKvStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_items(&mut self, items: &[(&str, String)]) -> Result<(), StoreError> {
        let next = staged(&self.entries, items, self.quota)?;
        let json = serde_json::to_string_pretty(&next).map_err(|source| StoreError::Serialize {
            key: self.path.display().to_string(),
            source,
        })?;
        atomic_write(&self.path, &json)?;
        self.entries = next;
        Ok(())
    }
}

/// In-process store used by tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
    writes: usize,
}

#[cfg(test)]
impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Number of successful `set_items` calls so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryKvStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_items(&mut self, items: &[(&str, String)]) -> Result<(), StoreError> {
        self.entries = staged(&self.entries, items, self.quota)?;
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_get() {
        let mut store = MemoryKvStore::new();
        assert!(store.get_item("todos").is_none());

        store.set_item("todos", "[]".to_string()).unwrap();
        assert_eq!(store.get_item("todos").as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_quota_rejects_whole_batch() {
        let mut store = MemoryKvStore::with_quota(12);
        store.set_item("a", "1".to_string()).unwrap();

        let err = store
            .set_items(&[("b", "2".to_string()), ("c", "too long value".to_string())])
            .unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { quota: 12, .. }));

        // Nothing from the rejected batch landed
        assert!(store.get_item("b").is_none());
        assert!(store.get_item("c").is_none());
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        let mut store = FileKvStore::open(&path, None);
        store
            .set_items(&[("todos", "[]".to_string()), ("lastTodoId", "4".to_string())])
            .unwrap();

        let reopened = FileKvStore::open(&path, None);
        assert_eq!(reopened.get_item("todos").as_deref(), Some("[]"));
        assert_eq!(reopened.get_item("lastTodoId").as_deref(), Some("4"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_file_store_corrupt_file_opens_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("local_storage.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileKvStore::open(&path, None);
        assert!(store.get_item("todos").is_none());
    }

    #[test]
    fn test_file_store_quota_leaves_file_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        let mut store = FileKvStore::open(&path, Some(8));
        store.set_item("k", "v".to_string()).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(store.set_item("k", "much too long".to_string()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.get_item("k").as_deref(), Some("v"));
    }
}
