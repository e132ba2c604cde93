//! File-backed KV store: one file per key under a data directory.
//!
//! Writes go to a sibling temp file first and are renamed over the target,
//! so a crash mid-write leaves the previous value intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use super::KvStore;
use crate::{Error, Result};

/// Persistent key-value store on the local filesystem.
///
/// # Example
///
/// ```rust,no_run
/// use ringneck_incubator::kv::{FileKvStore, KvStore};
///
/// # async fn example() -> ringneck_incubator::Result<()> {
/// let store = FileKvStore::new(".ringneck");
/// store.set("ringNeckEggs", b"[]".to_vec()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the value of `key`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` are replaced so a key can never
    /// escape the data directory.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        if name.is_empty() {
            name.push('_');
        }
        name.push_str(".json");
        self.root.join(name)
    }
}

impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let target = self.path_for(key);
        let temp = target.with_extension("json.tmp");
        let persist_err =
            |e: std::io::Error| Error::Persistence(format!("{}: {e}", target.display()));

        fs::create_dir_all(&self.root).await.map_err(persist_err)?;
        fs::write(&temp, &value).await.map_err(persist_err)?;
        fs::rename(&temp, &target).await.map_err(persist_err)?;

        debug!(path = %target.display(), bytes = value.len(), "value written");
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Persistence(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_kv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path().join("data"));

        assert_eq!(store.get("ringNeckEggs").await.unwrap(), None);
        store.set("ringNeckEggs", b"[]".to_vec()).await.unwrap();
        assert_eq!(store.get("ringNeckEggs").await.unwrap(), Some(b"[]".to_vec()));
        assert!(store.exists("ringNeckEggs").await.unwrap());

        store.delete("ringNeckEggs").await.unwrap();
        assert!(!store.exists("ringNeckEggs").await.unwrap());
    }

    #[tokio::test]
    async fn test_file_kv_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKvStore::new(dir.path());

        store.set("eggs", b"[1]".to_vec()).await.unwrap();
        store.set("eggs", b"[2]".to_vec()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["eggs.json".to_string()]);
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let store = FileKvStore::new("/data");
        assert_eq!(store.path_for("../etc/passwd"), PathBuf::from("/data/___etc_passwd.json"));
        assert_eq!(store.path_for(""), PathBuf::from("/data/_.json"));
    }

    #[tokio::test]
    async fn test_file_kv_write_failure_is_persistence_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let store = FileKvStore::new(&blocker);
        let err = store.set("eggs", b"[]".to_vec()).await.unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
    }
}
