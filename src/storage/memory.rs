//! In-memory key-value store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::storage::{KeyValueStore, StorageResult};

/// A thread-safe, non-durable store.
///
/// Used as the test fixture throughout the crate and as the store of last
/// resort when no writable location exists. Cloning shares the underlying
/// map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.get(key).map(|r| r.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[tokio::test]
    async fn test_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get(keys::TOKEN).await.unwrap().is_none());

        store.set(keys::TOKEN, "abc123").await.unwrap();
        assert_eq!(store.get(keys::TOKEN).await.unwrap().as_deref(), Some("abc123"));

        store.remove(keys::TOKEN).await.unwrap();
        assert!(store.get(keys::TOKEN).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let store = MemoryStore::new();
        store.remove("never-set").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let store = MemoryStore::new();
        let alias = store.clone();
        alias.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
