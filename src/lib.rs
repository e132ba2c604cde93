//! # Ringneck Incubator: egg weight-loss tracking
//!
//! Tracks Ring Neck egg weights at incubation checkpoints (days 5, 10, 15,
//! 20), computes the weight lost since laying and classifies it against the
//! ideal range for the day.
//!
//! ## Layout
//!
//! - [`metrics`]: loss percentage, status classification, reference curves
//! - [`record`]: the egg record model and seed data
//! - [`kv`] / [`store`]: persisted key-value state and the record store
//! - [`export`]: semicolon-delimited CSV
//! - [`chart`]: series for an external chart renderer
//! - [`app`]: controller tying store and chart together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ringneck_incubator::app::App;
//! use ringneck_incubator::kv::FileKvStore;
//! use ringneck_incubator::record::{CheckpointDay, EggField};
//! use ringneck_incubator::store::{CorruptStatePolicy, DEFAULT_STORAGE_KEY};
//!
//! # async fn example() -> ringneck_incubator::Result<()> {
//! let mut app = App::open(
//!     FileKvStore::new(".ringneck"),
//!     DEFAULT_STORAGE_KEY,
//!     CorruptStatePolicy::Reject,
//! )
//! .await?;
//!
//! app.update_field(3, EggField::WeightAtDay(CheckpointDay::Day5), "9.75").await?;
//! for row in app.rows() {
//!     println!("{} {:?}", row.egg.id(), row.checkpoints[0].status);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod app;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod kv;
pub mod metrics;
pub mod record;
pub mod store;

pub use error::{Error, Result};
