//! Checkpoint days and editable field names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Incubation day at which a weight is taken and classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CheckpointDay {
    /// Day 5
    Day5,
    /// Day 10
    Day10,
    /// Day 15
    Day15,
    /// Day 20
    Day20,
}

impl CheckpointDay {
    /// All checkpoints in chronological order.
    pub const ALL: [Self; 4] = [Self::Day5, Self::Day10, Self::Day15, Self::Day20];

    /// Day offset from incubator entry.
    #[must_use]
    pub const fn day(self) -> u32 {
        match self {
            Self::Day5 => 5,
            Self::Day10 => 10,
            Self::Day15 => 15,
            Self::Day20 => 20,
        }
    }
}

impl TryFrom<u32> for CheckpointDay {
    type Error = String;

    fn try_from(day: u32) -> Result<Self, Self::Error> {
        match day {
            5 => Ok(Self::Day5),
            10 => Ok(Self::Day10),
            15 => Ok(Self::Day15),
            20 => Ok(Self::Day20),
            other => Err(format!("{other} is not a checkpoint day (5, 10, 15, 20)")),
        }
    }
}

impl From<CheckpointDay> for u32 {
    fn from(day: CheckpointDay) -> Self {
        day.day()
    }
}

impl fmt::Display for CheckpointDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day())
    }
}

/// A field of [`EggRecord`](super::EggRecord) addressable by `update_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EggField {
    /// Egg label (read-only)
    Id,
    /// Lay date
    LayDate,
    /// Baseline weight
    InitialWeight,
    /// Date the egg entered the incubator
    IncubatorEntryDate,
    /// Weight snapshot at a checkpoint
    WeightAtDay(CheckpointDay),
    /// Hatch date
    HatchDate,
    /// Free-text notes
    Notes,
}

impl EggField {
    /// Every field, in table / CSV order.
    pub const ALL: [Self; 10] = [
        Self::Id,
        Self::LayDate,
        Self::InitialWeight,
        Self::IncubatorEntryDate,
        Self::WeightAtDay(CheckpointDay::Day5),
        Self::WeightAtDay(CheckpointDay::Day10),
        Self::WeightAtDay(CheckpointDay::Day15),
        Self::WeightAtDay(CheckpointDay::Day20),
        Self::HatchDate,
        Self::Notes,
    ];

    /// Persisted (camelCase) field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LayDate => "layDate",
            Self::InitialWeight => "initialWeight",
            Self::IncubatorEntryDate => "incubatorEntryDate",
            Self::WeightAtDay(CheckpointDay::Day5) => "weightAtDay5",
            Self::WeightAtDay(CheckpointDay::Day10) => "weightAtDay10",
            Self::WeightAtDay(CheckpointDay::Day15) => "weightAtDay15",
            Self::WeightAtDay(CheckpointDay::Day20) => "weightAtDay20",
            Self::HatchDate => "hatchDate",
            Self::Notes => "notes",
        }
    }

    /// Field name used by the original browser application.
    #[must_use]
    pub const fn legacy_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::LayDate => "data_postura",
            Self::InitialWeight => "peso_inicial",
            Self::IncubatorEntryDate => "entrada_chocadeira",
            Self::WeightAtDay(CheckpointDay::Day5) => "peso_5_dias",
            Self::WeightAtDay(CheckpointDay::Day10) => "peso_10_dias",
            Self::WeightAtDay(CheckpointDay::Day15) => "peso_15_dias",
            Self::WeightAtDay(CheckpointDay::Day20) => "peso_20_dias",
            Self::HatchDate => "data_eclosao",
            Self::Notes => "observacoes",
        }
    }
}

impl FromStr for EggField {
    type Err = Error;

    /// Accepts the camelCase name, its snake_case spelling, or the legacy name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().chars().filter(|c| *c != '_').collect::<String>().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| {
                field.name().to_lowercase() == normalized || field.legacy_name() == s.trim()
            })
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl fmt::Display for EggField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_try_from() {
        assert_eq!(CheckpointDay::try_from(10), Ok(CheckpointDay::Day10));
        assert!(CheckpointDay::try_from(7).is_err());
    }

    #[test]
    fn test_field_parse_all_spellings() {
        assert_eq!(
            "weightAtDay5".parse::<EggField>().unwrap(),
            EggField::WeightAtDay(CheckpointDay::Day5)
        );
        assert_eq!(
            "weight_at_day_15".parse::<EggField>().unwrap(),
            EggField::WeightAtDay(CheckpointDay::Day15)
        );
        assert_eq!("peso_20_dias".parse::<EggField>().unwrap(), EggField::WeightAtDay(CheckpointDay::Day20));
        assert_eq!("observacoes".parse::<EggField>().unwrap(), EggField::Notes);
        assert_eq!("hatch_date".parse::<EggField>().unwrap(), EggField::HatchDate);
    }

    #[test]
    fn test_field_parse_unknown() {
        let err = "colour".parse::<EggField>().unwrap_err();
        assert!(matches!(err, Error::UnknownField(name) if name == "colour"));
    }
}
