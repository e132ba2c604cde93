//! Key-Value persistence layer
//!
//! The record collection lives under a single key, the way a browser keeps
//! it in local storage. Two backends:
//! - [`MemoryKvStore`]: ephemeral, for tests and throwaway sessions
//! - [`FileKvStore`]: one file per key in a data directory
//!
//! # Example
//!
//! ```rust,no_run
//! use ringneck_incubator::kv::{KvStore, MemoryKvStore};
//!
//! # async fn example() -> ringneck_incubator::Result<()> {
//! let store = MemoryKvStore::new();
//!
//! store.set("ringNeckEggs", b"[]".to_vec()).await?;
//! let value = store.get("ringNeckEggs").await?;
//! assert_eq!(value, Some(b"[]".to_vec()));
//!
//! store.delete("ringNeckEggs").await?;
//! assert!(!store.exists("ringNeckEggs").await?);
//! # Ok(())
//! # }
//! ```

mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use crate::Result;
use std::future::Future;

/// Key-value store trait backing the record store.
///
/// `set` overwrites the whole value; there are no partial writes.
pub trait KvStore: Send + Sync {
    /// Get a value by key.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Set a value for a key.
    ///
    /// Overwrites any existing value. Write failures are reported as
    /// [`Error::Persistence`](crate::Error::Persistence).
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Delete a key.
    ///
    /// No-op if the key doesn't exist.
    fn delete(&self, key: &str) -> impl Future<Output = Result<()>> + Send;

    /// Check if a key exists.
    fn exists(&self, key: &str) -> impl Future<Output = Result<bool>> + Send {
        async move { Ok(self.get(key).await?.is_some()) }
    }
}
