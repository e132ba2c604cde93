//! Chart series derived from the record collection
//!
//! The chart plots weight as a percentage of the initial weight over
//! incubation days: the ideal band (upper/lower) and target line from the
//! reference curve, and one series per egg. Rendering belongs to a
//! [`RenderSurface`]; this module only produces [`ChartData`].

mod surface;

pub use surface::{JsonFileSurface, RenderSurface};

use serde::Serialize;

use crate::metrics::{weight_pct_of_initial, IDEAL_CURVE};
use crate::record::{CheckpointDay, EggRecord};

/// Colours assigned to egg series, cycled by position.
pub const SERIES_PALETTE: [&str; 9] = [
    "#FFC185", "#B4413C", "#ECEBD5", "#5D878F", "#DB4545", "#D2BA4C", "#964325", "#944454",
    "#13343B",
];

/// Colour of the ideal band and target line.
pub const IDEAL_COLOR: &str = "#1FB8CD";

/// One `(day, percent of initial weight)` point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Incubation day
    pub day: u32,
    /// Weight as percent of initial
    pub pct: f64,
}

/// Series for one egg.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EggSeries {
    /// Legend label, `Peso <id>`
    pub label: String,
    /// Line colour
    pub color: &'static str,
    /// Day 0 at 100%, then measured checkpoints only
    pub points: Vec<ChartPoint>,
}

/// Linear axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Axis title
    pub title: &'static str,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Tick spacing
    pub step: f64,
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Chart title
    pub title: &'static str,
    /// Incubation days
    pub x_axis: Axis,
    /// Weight percent
    pub y_axis: Axis,
    /// Colour of the ideal band and target line
    pub ideal_color: &'static str,
    /// Upper edge of the ideal band
    pub ideal_upper: Vec<ChartPoint>,
    /// Lower edge of the ideal band
    pub ideal_lower: Vec<ChartPoint>,
    /// Ideal target line
    pub ideal_target: Vec<ChartPoint>,
    /// One series per egg, in collection order
    pub eggs: Vec<EggSeries>,
}

impl ChartData {
    /// Build chart data for `records`.
    #[must_use]
    pub fn from_records(records: &[EggRecord]) -> Self {
        let curve = |pick: fn(&crate::metrics::IdealCurvePoint) -> f64| {
            IDEAL_CURVE
                .iter()
                .map(|point| ChartPoint { day: point.day, pct: pick(point) })
                .collect::<Vec<_>>()
        };

        Self {
            title: "Curva Ideal de Perda de Peso - Ovos Ring Neck",
            x_axis: Axis { title: "Dias de Incubação", min: 0.0, max: 23.0, step: 5.0 },
            y_axis: Axis { title: "Peso (% do inicial)", min: 85.0, max: 101.0, step: 2.0 },
            ideal_color: IDEAL_COLOR,
            ideal_upper: curve(|p| p.upper_pct),
            ideal_lower: curve(|p| p.lower_pct),
            ideal_target: curve(|p| p.target_pct),
            eggs: records
                .iter()
                .enumerate()
                .map(|(index, egg)| egg_series(egg, index))
                .collect(),
        }
    }
}

/// Series for `egg` at position `index` in the collection.
#[must_use]
pub fn egg_series(egg: &EggRecord, index: usize) -> EggSeries {
    let mut points = vec![ChartPoint { day: 0, pct: 100.0 }];
    points.extend(CheckpointDay::ALL.into_iter().filter_map(|day| {
        let weight = egg.weight_at(day)?;
        let pct = weight_pct_of_initial(egg.initial_weight(), weight)?;
        Some(ChartPoint { day: day.day(), pct })
    }));

    EggSeries {
        label: format!("Peso {}", egg.id()),
        color: SERIES_PALETTE[index % SERIES_PALETTE.len()],
        points,
    }
}
