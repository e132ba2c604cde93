//! Egg Record - one physical egg under observation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{lenient, parse_date, CheckpointDay, EggField};
use crate::metrics::{self, parse_weight, WeightStatus};
use crate::{Error, Result};

/// Egg Record tracks one egg from laying to hatch.
///
/// Weights are grams. The initial weight is the baseline every checkpoint
/// loss is measured against; checkpoint weights stay `None` until taken.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EggRecord {
    id: String,
    #[serde(alias = "data_postura")]
    lay_date: NaiveDate,
    #[serde(alias = "peso_inicial", deserialize_with = "lenient::required_weight")]
    initial_weight: f64,
    #[serde(alias = "entrada_chocadeira")]
    incubator_entry_date: NaiveDate,
    #[serde(
        default,
        alias = "peso_5_dias",
        deserialize_with = "lenient::optional_weight",
        skip_serializing_if = "Option::is_none"
    )]
    weight_at_day5: Option<f64>,
    #[serde(
        default,
        alias = "peso_10_dias",
        deserialize_with = "lenient::optional_weight",
        skip_serializing_if = "Option::is_none"
    )]
    weight_at_day10: Option<f64>,
    #[serde(
        default,
        alias = "peso_15_dias",
        deserialize_with = "lenient::optional_weight",
        skip_serializing_if = "Option::is_none"
    )]
    weight_at_day15: Option<f64>,
    #[serde(
        default,
        alias = "peso_20_dias",
        deserialize_with = "lenient::optional_weight",
        skip_serializing_if = "Option::is_none"
    )]
    weight_at_day20: Option<f64>,
    #[serde(
        default,
        alias = "data_eclosao",
        deserialize_with = "lenient::optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    hatch_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "observacoes",
        deserialize_with = "lenient::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    notes: Option<String>,
}

impl EggRecord {
    /// Create a new egg record with no checkpoint weights.
    ///
    /// # Arguments
    ///
    /// * `id` - User-assigned label (e.g. "B1")
    /// * `lay_date` - Day the egg was laid
    /// * `initial_weight` - Baseline weight in grams
    /// * `incubator_entry_date` - Day the egg entered the incubator
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        lay_date: NaiveDate,
        initial_weight: f64,
        incubator_entry_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            lay_date,
            initial_weight,
            incubator_entry_date,
            weight_at_day5: None,
            weight_at_day10: None,
            weight_at_day15: None,
            weight_at_day20: None,
            hatch_date: None,
            notes: None,
        }
    }

    /// Create a builder for constructing an egg record with optional fields.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        lay_date: NaiveDate,
        initial_weight: f64,
        incubator_entry_date: NaiveDate,
    ) -> EggRecordBuilder {
        EggRecordBuilder::new(id, lay_date, initial_weight, incubator_entry_date)
    }

    /// Get the egg label.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the lay date.
    #[must_use]
    pub const fn lay_date(&self) -> NaiveDate {
        self.lay_date
    }

    /// Get the baseline weight in grams.
    #[must_use]
    pub const fn initial_weight(&self) -> f64 {
        self.initial_weight
    }

    /// Get the incubator entry date.
    #[must_use]
    pub const fn incubator_entry_date(&self) -> NaiveDate {
        self.incubator_entry_date
    }

    /// Get the weight measured at `day`, if taken.
    #[must_use]
    pub const fn weight_at(&self, day: CheckpointDay) -> Option<f64> {
        match day {
            CheckpointDay::Day5 => self.weight_at_day5,
            CheckpointDay::Day10 => self.weight_at_day10,
            CheckpointDay::Day15 => self.weight_at_day15,
            CheckpointDay::Day20 => self.weight_at_day20,
        }
    }

    /// Get the hatch date, if hatched.
    #[must_use]
    pub const fn hatch_date(&self) -> Option<NaiveDate> {
        self.hatch_date
    }

    /// Get the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Weight-loss percentage at `day`, rounded to one decimal.
    #[must_use]
    pub fn loss_pct(&self, day: CheckpointDay) -> Option<f64> {
        metrics::compute_weight_loss_pct(Some(self.initial_weight), self.weight_at(day))
    }

    /// Status at `day` against the ideal range.
    #[must_use]
    pub fn status(&self, day: CheckpointDay) -> Option<WeightStatus> {
        metrics::classify_status(self.loss_pct(day), day.day())
    }

    fn weight_slot(&mut self, day: CheckpointDay) -> &mut Option<f64> {
        match day {
            CheckpointDay::Day5 => &mut self.weight_at_day5,
            CheckpointDay::Day10 => &mut self.weight_at_day10,
            CheckpointDay::Day15 => &mut self.weight_at_day15,
            CheckpointDay::Day20 => &mut self.weight_at_day20,
        }
    }

    /// Apply a raw text edit to one field.
    ///
    /// Checkpoint weights that do not parse are stored as not measured.
    /// Empty hatch date and notes clear the field.
    ///
    /// # Errors
    ///
    /// * [`Error::ReadOnlyField`] for `id`
    /// * [`Error::InvalidValue`] when the initial weight or a required date
    ///   does not parse, or the hatch date is not `YYYY-MM-DD`
    pub fn set_field(&mut self, field: EggField, value: &str) -> Result<()> {
        let invalid = || Error::InvalidValue {
            field: field.name().to_string(),
            value: value.to_string(),
        };

        match field {
            EggField::Id => return Err(Error::ReadOnlyField(field.name().to_string())),
            EggField::LayDate => self.lay_date = parse_date(value).ok_or_else(invalid)?,
            EggField::InitialWeight => {
                self.initial_weight = parse_weight(value).ok_or_else(invalid)?;
            }
            EggField::IncubatorEntryDate => {
                self.incubator_entry_date = parse_date(value).ok_or_else(invalid)?;
            }
            EggField::WeightAtDay(day) => {
                let weight = parse_weight(value);
                if weight.is_none() && !value.trim().is_empty() {
                    debug!(egg = %self.id, %day, value, "unparseable weight stored as not measured");
                }
                *self.weight_slot(day) = weight;
            }
            EggField::HatchDate => {
                self.hatch_date = if value.trim().is_empty() {
                    None
                } else {
                    Some(parse_date(value).ok_or_else(invalid)?)
                };
            }
            EggField::Notes => {
                self.notes = (!value.is_empty()).then(|| value.to_string());
            }
        }
        Ok(())
    }
}

/// Builder for `EggRecord`.
#[derive(Debug)]
pub struct EggRecordBuilder {
    record: EggRecord,
}

impl EggRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        lay_date: NaiveDate,
        initial_weight: f64,
        incubator_entry_date: NaiveDate,
    ) -> Self {
        Self {
            record: EggRecord::new(id, lay_date, initial_weight, incubator_entry_date),
        }
    }

    /// Set the weight measured at a checkpoint.
    ///
    /// A non-finite weight leaves the checkpoint unmeasured.
    #[must_use]
    pub fn weight_at(mut self, day: CheckpointDay, weight: f64) -> Self {
        *self.record.weight_slot(day) = Some(weight).filter(|w| w.is_finite());
        self
    }

    /// Set the hatch date.
    #[must_use]
    pub const fn hatch_date(mut self, date: NaiveDate) -> Self {
        self.record.hatch_date = Some(date);
        self
    }

    /// Set free-text notes. Empty notes are stored as none.
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = Some(notes.into()).filter(|text| !text.is_empty());
        self
    }

    /// Build the `EggRecord`.
    #[must_use]
    pub fn build(self) -> EggRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn b1() -> EggRecord {
        EggRecord::builder("B1", date("2025-07-30"), 9.1, date("2025-08-03"))
            .weight_at(CheckpointDay::Day5, 8.8)
            .build()
    }

    #[test]
    fn test_new_has_no_measurements() {
        let egg = EggRecord::new("B4", date("2025-08-04"), 10.0, date("2025-08-04"));
        for day in CheckpointDay::ALL {
            assert!(egg.weight_at(day).is_none());
            assert!(egg.loss_pct(day).is_none());
            assert!(egg.status(day).is_none());
        }
        assert!(egg.hatch_date().is_none());
        assert!(egg.notes().is_none());
    }

    #[test]
    fn test_loss_and_status() {
        let egg = b1();
        assert_eq!(egg.loss_pct(CheckpointDay::Day5), Some(3.3));
        assert_eq!(egg.status(CheckpointDay::Day5), Some(WeightStatus::Ideal));
    }

    #[test]
    fn test_set_weight_unparseable_clears() {
        let mut egg = b1();
        egg.set_field(EggField::WeightAtDay(CheckpointDay::Day5), "abc").unwrap();
        assert_eq!(egg.weight_at(CheckpointDay::Day5), None);

        egg.set_field(EggField::WeightAtDay(CheckpointDay::Day10), "8.5").unwrap();
        assert_eq!(egg.weight_at(CheckpointDay::Day10), Some(8.5));
    }

    #[test]
    fn test_set_id_is_read_only() {
        let mut egg = b1();
        let err = egg.set_field(EggField::Id, "B9").unwrap_err();
        assert!(matches!(err, Error::ReadOnlyField(_)));
        assert_eq!(egg.id(), "B1");
    }

    #[test]
    fn test_set_initial_weight_rejects_garbage() {
        let mut egg = b1();
        let err = egg.set_field(EggField::InitialWeight, "").unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!((egg.initial_weight() - 9.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_hatch_date_and_clear() {
        let mut egg = b1();
        egg.set_field(EggField::HatchDate, "2025-08-26").unwrap();
        assert_eq!(egg.hatch_date(), Some(date("2025-08-26")));
        egg.set_field(EggField::HatchDate, "").unwrap();
        assert_eq!(egg.hatch_date(), None);
        assert!(egg.set_field(EggField::HatchDate, "26/08/2025").is_err());
    }

    #[test]
    fn test_set_notes() {
        let mut egg = b1();
        egg.set_field(EggField::Notes, "casca fina").unwrap();
        assert_eq!(egg.notes(), Some("casca fina"));
        egg.set_field(EggField::Notes, "").unwrap();
        assert_eq!(egg.notes(), None);
    }

    #[test]
    fn test_builder_normalises_like_set_field() {
        let egg = EggRecord::builder("B1", date("2025-07-30"), 9.1, date("2025-08-03"))
            .weight_at(CheckpointDay::Day5, f64::NAN)
            .weight_at(CheckpointDay::Day10, f64::INFINITY)
            .notes("")
            .build();
        assert_eq!(egg.weight_at(CheckpointDay::Day5), None);
        assert_eq!(egg.weight_at(CheckpointDay::Day10), None);
        assert_eq!(egg.notes(), None);

        let mut edited = egg.clone();
        edited.set_field(EggField::Notes, "").unwrap();
        edited.set_field(EggField::WeightAtDay(CheckpointDay::Day5), "NaN").unwrap();
        assert_eq!(edited, egg);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(b1()).unwrap();
        assert_eq!(json["id"], "B1");
        assert_eq!(json["layDate"], "2025-07-30");
        assert_eq!(json["weightAtDay5"], 8.8);
        assert!(json.get("weightAtDay10").is_none());
    }

    #[test]
    fn test_legacy_json_import() {
        let legacy = r#"{
            "id": "B2",
            "data_postura": "2025-07-31",
            "peso_inicial": "8.8",
            "entrada_chocadeira": "2025-08-03",
            "peso_5_dias": 8.5,
            "peso_10_dias": "",
            "peso_15_dias": "x",
            "peso_20_dias": null,
            "data_eclosao": "",
            "observacoes": ""
        }"#;
        let egg: EggRecord = serde_json::from_str(legacy).unwrap();
        assert_eq!(egg.id(), "B2");
        assert!((egg.initial_weight() - 8.8).abs() < f64::EPSILON);
        assert_eq!(egg.weight_at(CheckpointDay::Day5), Some(8.5));
        assert_eq!(egg.weight_at(CheckpointDay::Day10), None);
        assert_eq!(egg.weight_at(CheckpointDay::Day15), None);
        assert_eq!(egg.hatch_date(), None);
        assert_eq!(egg.notes(), None);
    }

    #[test]
    fn test_unparseable_initial_weight_fails_decode() {
        let json = r#"{"id":"B1","layDate":"2025-07-30","initialWeight":"heavy","incubatorEntryDate":"2025-08-03"}"#;
        assert!(serde_json::from_str::<EggRecord>(json).is_err());
    }
}
