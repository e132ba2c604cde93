//! Record Store - ordered egg collection with write-through persistence
//!
//! The collection is loaded once, then every mutation rewrites the whole
//! collection under a single key. Ordering is insertion order.
//!
//! A failed write after a successful in-memory mutation keeps the mutation:
//! memory and storage diverge until the next successful `persist`.

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::kv::KvStore;
use crate::record::seed::seed_records;
use crate::record::{EggField, EggRecord};
use crate::{Error, Result};

/// Default key the collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "ringNeckEggs";

/// What `load` does when persisted state cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptStatePolicy {
    /// Return [`Error::CorruptState`] and leave storage untouched.
    #[default]
    Reject,
    /// Log a warning and start from seed data.
    FallbackToSeed,
}

/// Ordered collection of egg records persisted through a [`KvStore`].
///
/// ## Example
///
/// ```rust
/// use ringneck_incubator::kv::MemoryKvStore;
/// use ringneck_incubator::store::EggStore;
///
/// # async fn example() -> ringneck_incubator::Result<()> {
/// let mut store = EggStore::new(MemoryKvStore::new());
/// store.load().await?;
/// assert_eq!(store.len(), 5); // seeded B1..B5
///
/// store.update_field(0, "weightAtDay10".parse()?, "8.6").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EggStore<S> {
    backend: S,
    key: String,
    policy: CorruptStatePolicy,
    records: Vec<EggRecord>,
}

impl<S: KvStore> EggStore<S> {
    /// Create an empty store over `backend` with the default key and policy.
    ///
    /// Call [`load`](Self::load) before use.
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
            policy: CorruptStatePolicy::default(),
            records: Vec::new(),
        }
    }

    /// Use a different storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the corrupt-state policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: CorruptStatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying backend.
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[EggRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record labelled `id`. Labels are not guaranteed unique.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<(usize, &EggRecord)> {
        self.records.iter().enumerate().find(|(_, egg)| egg.id() == id)
    }

    /// Load the collection from storage, or from seed data if nothing is stored.
    ///
    /// Seeding does not write to storage; the first mutation does.
    ///
    /// # Errors
    ///
    /// * [`Error::CorruptState`] when stored state does not decode and the
    ///   policy is [`CorruptStatePolicy::Reject`]
    /// * Backend read errors
    pub async fn load(&mut self) -> Result<&[EggRecord]> {
        self.records = match self.backend.get(&self.key).await? {
            None => {
                debug!(key = %self.key, "no persisted state, using seed data");
                seed_records()
            }
            Some(bytes) => match serde_json::from_slice::<Vec<EggRecord>>(&bytes) {
                Ok(records) => {
                    debug!(key = %self.key, count = records.len(), "loaded persisted state");
                    records
                }
                Err(e) => match self.policy {
                    CorruptStatePolicy::Reject => {
                        return Err(Error::CorruptState(format!("{}: {e}", self.key)));
                    }
                    CorruptStatePolicy::FallbackToSeed => {
                        warn!(key = %self.key, error = %e, "persisted state unreadable, using seed data");
                        seed_records()
                    }
                },
            },
        };
        Ok(&self.records)
    }

    /// Serialize the whole collection and overwrite the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`] when the backend refuses the write.
    pub async fn persist(&self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.records)?;
        match self.backend.set(&self.key, bytes).await {
            Ok(()) => {
                debug!(key = %self.key, count = self.records.len(), "collection persisted");
                Ok(())
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "persist failed; in-memory changes kept");
                Err(match e {
                    Error::Persistence(_) => e,
                    other => Error::Persistence(other.to_string()),
                })
            }
        }
    }

    /// Append a record, then persist.
    ///
    /// Duplicate ids are accepted.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidValue`] if the initial weight is not finite; nothing is appended
    /// * [`Error::Persistence`] if the write fails; the record stays appended
    pub async fn add_record(&mut self, record: EggRecord) -> Result<&[EggRecord]> {
        if !record.initial_weight().is_finite() {
            return Err(Error::InvalidValue {
                field: EggField::InitialWeight.name().to_string(),
                value: record.initial_weight().to_string(),
            });
        }
        info!(id = record.id(), position = self.records.len(), "adding egg");
        self.records.push(record);
        self.persist().await?;
        Ok(&self.records)
    }

    /// Set one field of the record at `index`, then persist.
    ///
    /// # Errors
    ///
    /// * [`Error::IndexOutOfRange`] if `index` is not a valid position
    /// * Field errors from [`EggRecord::set_field`]; nothing is persisted
    /// * [`Error::Persistence`] if the write fails; the edit stays in memory
    pub async fn update_field(
        &mut self,
        index: usize,
        field: EggField,
        value: &str,
    ) -> Result<&[EggRecord]> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        record.set_field(field, value)?;
        info!(id = record.id(), index, %field, value, "egg updated");
        self.persist().await?;
        Ok(&self.records)
    }

    /// Drop persisted state and return to seed data.
    ///
    /// # Errors
    ///
    /// Returns backend errors from the delete.
    pub async fn reset(&mut self) -> Result<&[EggRecord]> {
        self.backend.delete(&self.key).await?;
        self.records = seed_records();
        info!(key = %self.key, "state reset to seed data");
        Ok(&self.records)
    }
}
