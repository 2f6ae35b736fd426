//! JSON-file-backed key-value store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageResult};

/// A store persisting all keys into a single JSON object file.
///
/// The whole map is held in memory and rewritten on every mutation; the file
/// is a handful of short strings, so durability wins over write efficiency.
/// Cloning shares the map and the path.
#[derive(Clone)]
pub struct JsonFileStore {
    inner: Arc<DashMap<String, String>>,
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing state if the file exists.
    ///
    /// A missing file means an empty store (first launch); a present but
    /// unreadable or corrupt file is an error the caller decides about.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = Arc::new(DashMap::new());

        if path.exists() {
            let file = File::open(&path)?;
            let reader = BufReader::new(file);
            let map: BTreeMap<String, String> = serde_json::from_reader(reader)?;
            let entries = map.len();
            for (k, v) in map {
                inner.insert(k, v);
            }
            tracing::debug!(path = %path.display(), entries, "Loaded persisted store");
        }

        Ok(Self { inner, path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StorageResult<()> {
        let map: BTreeMap<String, String> = self
            .inner
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect();

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &map)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.get(key).map(|r| r.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.insert(key.to_string(), value.to_string());
        self.persist()
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key);
        self.persist()
    }
}
