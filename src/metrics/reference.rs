//! Reference data for Ring Neck incubation: ideal ranges and the ideal curve

use serde::Serialize;

/// Acceptable weight-loss band (percentage points) for one checkpoint day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealRange {
    /// Checkpoint day
    pub day: u32,
    /// Lower bound, inclusive
    pub min: f64,
    /// Upper bound, inclusive
    pub max: f64,
}

impl IdealRange {
    /// Whether `loss` falls inside the band.
    #[must_use]
    pub fn contains(&self, loss: f64) -> bool {
        self.min <= loss && loss <= self.max
    }
}

/// Ideal ranges keyed by checkpoint day.
pub const IDEAL_RANGES: [IdealRange; 4] = [
    IdealRange { day: 5, min: 1.5, max: 3.5 },
    IdealRange { day: 10, min: 4.0, max: 6.0 },
    IdealRange { day: 15, min: 6.5, max: 8.5 },
    IdealRange { day: 20, min: 9.0, max: 11.0 },
];

/// Look up the ideal range for `day`.
#[must_use]
pub fn ideal_range(day: u32) -> Option<&'static IdealRange> {
    IDEAL_RANGES.iter().find(|range| range.day == day)
}

/// One sample of the reference curve, as weight percent of initial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealCurvePoint {
    /// Incubation day
    pub day: u32,
    /// Target weight percent
    pub target_pct: f64,
    /// Upper edge of the band
    pub upper_pct: f64,
    /// Lower edge of the band
    pub lower_pct: f64,
}

/// Ideal curve, day 0 through hatch (day 23).
pub const IDEAL_CURVE: [IdealCurvePoint; 6] = [
    IdealCurvePoint { day: 0, target_pct: 100.0, upper_pct: 100.0, lower_pct: 100.0 },
    IdealCurvePoint { day: 5, target_pct: 97.5, upper_pct: 98.5, lower_pct: 96.5 },
    IdealCurvePoint { day: 10, target_pct: 95.0, upper_pct: 96.0, lower_pct: 94.0 },
    IdealCurvePoint { day: 15, target_pct: 92.5, upper_pct: 93.5, lower_pct: 91.5 },
    IdealCurvePoint { day: 20, target_pct: 90.0, upper_pct: 91.0, lower_pct: 89.0 },
    IdealCurvePoint { day: 23, target_pct: 88.0, upper_pct: 89.0, lower_pct: 87.0 },
];
