//! Egg record data model
//!
//! ## Schema Overview
//!
//! ```text
//! EggRecord
//!   ├── id, layDate, initialWeight, incubatorEntryDate   (set at creation)
//!   ├── weightAtDay{5,10,15,20}                          (absent until measured)
//!   └── hatchDate, notes                                 (optional)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ringneck_incubator::record::{CheckpointDay, EggRecord};
//!
//! let laid = NaiveDate::from_ymd_opt(2025, 7, 30).unwrap();
//! let entered = NaiveDate::from_ymd_opt(2025, 8, 3).unwrap();
//!
//! let egg = EggRecord::builder("B1", laid, 9.1, entered)
//!     .weight_at(CheckpointDay::Day5, 8.8)
//!     .build();
//!
//! assert_eq!(egg.loss_pct(CheckpointDay::Day5), Some(3.3));
//! ```

mod egg_record;
mod field;
mod lenient;
pub mod seed;

pub use egg_record::{EggRecord, EggRecordBuilder};
pub use field::{CheckpointDay, EggField};

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` calendar date.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
