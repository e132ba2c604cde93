//! Error types for ringneck-incubator
//!
//! A missing or unparseable optional weight is not an error: it simply means
//! the measurement has not been taken yet. Everything here is recoverable;
//! the record store stays usable after any of these.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Ringneck error types
#[derive(Error, Debug)]
pub enum Error {
    /// Field update addressed a record that does not exist
    #[error("Index out of range: record {index} requested but collection has {len} records")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Collection length at the time of the request
        len: usize,
    },

    /// Storage write failed; in-memory state was kept
    #[error("Persistence failed: {0}\nChanges are kept in memory; save again once storage is available")]
    Persistence(String),

    /// Persisted state could not be decoded
    #[error("Corrupt persisted state: {0}\nRun `ringneck reset` or set on_corrupt_state = \"fallback_to_seed\"")]
    CorruptState(String),

    /// Field name not recognised
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A required field received a value that cannot be stored
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Raw value as received
        value: String,
    },

    /// Field cannot be edited after creation
    #[error("Field is read-only: {0}")]
    ReadOnlyField(String),

    /// Rendering target is not available
    #[error("Render surface missing: {0}")]
    MissingSurface(String),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
