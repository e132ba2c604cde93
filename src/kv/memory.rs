//! In-memory KV store implementation using `DashMap`.
//!
//! Data is lost on process restart.

use std::sync::atomic::{AtomicBool, Ordering};

use super::KvStore;
use crate::{Error, Result};
use dashmap::DashMap;

/// In-memory key-value store.
///
/// Can be switched to read-only to reproduce a storage that refuses writes
/// (quota exceeded, storage disabled).
///
/// # Example
///
/// ```rust
/// use ringneck_incubator::kv::{KvStore, MemoryKvStore};
///
/// # async fn example() -> ringneck_incubator::Result<()> {
/// let store = MemoryKvStore::new();
/// store.set("ringNeckEggs", b"[]".to_vec()).await?;
/// assert_eq!(store.get("ringNeckEggs").await?, Some(b"[]".to_vec()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: DashMap<String, Vec<u8>>,
    read_only: AtomicBool,
}

impl MemoryKvStore {
    /// Create a new in-memory KV store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Refuse (or accept again) writes.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    fn check_writable(&self, key: &str) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(Error::Persistence(format!("storage is read-only, cannot write {key:?}")));
        }
        Ok(())
    }
}

impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.check_writable(key)?;
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.check_writable(key)?;
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }
}
