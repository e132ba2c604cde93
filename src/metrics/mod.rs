//! Metrics Engine - weight-loss percentage and status classification
//!
//! Pure functions, no side effects. Absent inputs never raise errors; they
//! propagate as `None` ("not measured yet").
//!
//! ## Usage
//!
//! ```rust
//! use ringneck_incubator::metrics::{classify_status, compute_weight_loss_pct, WeightStatus};
//!
//! let loss = compute_weight_loss_pct(Some(9.1), Some(8.8));
//! assert_eq!(loss, Some(3.3));
//! assert_eq!(classify_status(loss, 5), Some(WeightStatus::Ideal));
//!
//! // Day 5 not measured yet
//! assert_eq!(compute_weight_loss_pct(Some(10.0), None), None);
//! ```

mod reference;

pub use reference::{ideal_range, IdealCurvePoint, IdealRange, IDEAL_CURVE, IDEAL_RANGES};

use serde::{Deserialize, Serialize};

/// Classification of a loss percentage against the ideal range of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightStatus {
    /// Loss within `[min, max]` (inclusive).
    Ideal,
    /// Loss below `min`: egg is drying too slowly.
    Low,
    /// Loss above `max`: egg is drying too fast.
    High,
}

impl WeightStatus {
    /// Label shown in the table and the CSV export.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ideal => "IDEAL",
            Self::Low => "BAIXO",
            Self::High => "ALTO",
        }
    }
}

impl std::fmt::Display for WeightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a raw weight entry.
///
/// Empty, non-numeric and non-finite inputs are `None`.
#[must_use]
pub fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to one decimal place, half away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Weight-loss percentage between `initial` and `current`, rounded to one decimal.
///
/// Returns `None` when either weight is absent or non-finite, or when the
/// initial weight is zero (no baseline).
#[must_use]
pub fn compute_weight_loss_pct(initial: Option<f64>, current: Option<f64>) -> Option<f64> {
    let initial = initial.filter(|w| w.is_finite() && *w != 0.0)?;
    let current = current.filter(|w| w.is_finite())?;
    let loss = round1((initial - current) / initial * 100.0);
    loss.is_finite().then_some(loss)
}

/// [`compute_weight_loss_pct`] over raw text entries.
#[must_use]
pub fn compute_weight_loss_pct_str(initial: &str, current: &str) -> Option<f64> {
    compute_weight_loss_pct(parse_weight(initial), parse_weight(current))
}

/// Classify a loss percentage against the ideal range of `day`.
///
/// Returns `None` when the loss is absent or `day` is not a checkpoint day.
/// Both bounds are inclusive.
#[must_use]
pub fn classify_status(loss_pct: Option<f64>, day: u32) -> Option<WeightStatus> {
    let loss = loss_pct?;
    let range = ideal_range(day)?;
    if range.contains(loss) {
        Some(WeightStatus::Ideal)
    } else if loss < range.min {
        Some(WeightStatus::Low)
    } else {
        Some(WeightStatus::High)
    }
}

/// Current weight as a percentage of the initial weight (unrounded).
///
/// Used for chart series; `None` when there is no usable baseline.
#[must_use]
pub fn weight_pct_of_initial(initial: f64, current: f64) -> Option<f64> {
    if !initial.is_finite() || initial == 0.0 || !current.is_finite() {
        return None;
    }
    Some(current / initial * 100.0)
}
