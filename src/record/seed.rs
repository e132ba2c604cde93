//! Seed data used when no persisted state exists

use chrono::NaiveDate;

use super::{CheckpointDay, EggRecord};

struct SeedEgg {
    id: &'static str,
    lay_date: (i32, u32, u32),
    initial_weight: f64,
    incubator_entry_date: (i32, u32, u32),
    weight_at_day5: Option<f64>,
}

const SEED_EGGS: [SeedEgg; 5] = [
    SeedEgg {
        id: "B1",
        lay_date: (2025, 7, 30),
        initial_weight: 9.1,
        incubator_entry_date: (2025, 8, 3),
        weight_at_day5: Some(8.8),
    },
    SeedEgg {
        id: "B2",
        lay_date: (2025, 7, 31),
        initial_weight: 8.8,
        incubator_entry_date: (2025, 8, 3),
        weight_at_day5: Some(8.5),
    },
    SeedEgg {
        id: "B3",
        lay_date: (2025, 8, 3),
        initial_weight: 9.4,
        incubator_entry_date: (2025, 8, 3),
        weight_at_day5: Some(9.2),
    },
    SeedEgg {
        id: "B4",
        lay_date: (2025, 8, 4),
        initial_weight: 10.0,
        incubator_entry_date: (2025, 8, 4),
        weight_at_day5: None,
    },
    SeedEgg {
        id: "B5",
        lay_date: (2025, 8, 6),
        initial_weight: 9.3,
        incubator_entry_date: (2025, 8, 6),
        weight_at_day5: None,
    },
];

fn ymd((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The initial collection (eggs B1 to B5); fields not in the seed are absent.
#[must_use]
pub fn seed_records() -> Vec<EggRecord> {
    SEED_EGGS
        .iter()
        .map(|seed| {
            let mut builder = EggRecord::builder(
                seed.id,
                ymd(seed.lay_date),
                seed.initial_weight,
                ymd(seed.incubator_entry_date),
            );
            if let Some(weight) = seed.weight_at_day5 {
                builder = builder.weight_at(CheckpointDay::Day5, weight);
            }
            builder.build()
        })
        .collect()
}
