//! Configuration
//!
//! Layered, later sources win:
//! 1. Defaults in code
//! 2. `ringneck.toml` (or `.yaml` / `.json`) in the working directory, optional
//! 3. Environment variables with `RINGNECK_` prefix, e.g. `RINGNECK_DATA_DIR`

use std::path::{Path, PathBuf};

use config::{Environment, File};
use serde::Deserialize;

use crate::export::EXPORT_FILE_NAME;
use crate::store::{CorruptStatePolicy, DEFAULT_STORAGE_KEY};
use crate::Result;

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding persisted state
    pub data_dir: PathBuf,

    /// Key the egg collection is stored under
    pub storage_key: String,

    /// Default CSV export path
    pub export_file: PathBuf,

    /// Chart data file re-rendered after every change, if set
    #[serde(default)]
    pub chart_file: Option<PathBuf>,

    /// Behaviour when persisted state cannot be decoded
    pub on_corrupt_state: CorruptStatePolicy,
}

impl Config {
    /// Load from `ringneck.*` in the working directory and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) on unreadable files or bad values.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("ringneck"))
    }

    /// Load with `file` (extension optional) as the file layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) on unreadable files or bad values.
    pub fn load_from(file: &Path) -> Result<Self> {
        let config = config::Config::builder()
            .set_default("data_dir", ".ringneck")?
            .set_default("storage_key", DEFAULT_STORAGE_KEY)?
            .set_default("export_file", EXPORT_FILE_NAME)?
            .set_default("on_corrupt_state", "reject")?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix("RINGNECK").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".ringneck"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file: PathBuf::from(EXPORT_FILE_NAME),
            chart_file: None,
            on_corrupt_state: CorruptStatePolicy::Reject,
        }
    }
}
