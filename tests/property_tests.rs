//! Property-based tests for the metrics engine and the record store
//!
//! - Test arithmetic invariants of the loss formula
//! - Test classification against the ideal ranges
//! - Test persistence round-trips for arbitrary collections
//! - Run with ProptestConfig::with_cases(100)

use chrono::NaiveDate;
use proptest::prelude::*;
use ringneck_incubator::export::{export_csv, CSV_HEADER};
use ringneck_incubator::kv::{KvStore, MemoryKvStore};
use ringneck_incubator::metrics::{
    classify_status, compute_weight_loss_pct, ideal_range, round1, WeightStatus,
};
use ringneck_incubator::record::{CheckpointDay, EggRecord};
use ringneck_incubator::store::EggStore;

// ============================================================================
// Strategies
// ============================================================================

/// Weights in grams, one decimal like a kitchen scale
fn arb_weight() -> impl Strategy<Value = f64> {
    (10u32..200).prop_map(|tenths| f64::from(tenths) / 10.0)
}

/// Checkpoint readings, non-finite values included
fn arb_reading() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => arb_weight(),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..365).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_egg() -> impl Strategy<Value = EggRecord> {
    (
        "[A-Z][0-9]{1,2}",
        arb_date(),
        arb_weight(),
        arb_date(),
        proptest::collection::vec(proptest::option::of(arb_reading()), 4),
        proptest::option::of("[a-z ;]{0,20}"),
    )
        .prop_map(|(id, laid, initial, entered, weights, notes)| {
            let mut builder = EggRecord::builder(id, laid, initial, entered);
            for (day, weight) in CheckpointDay::ALL.into_iter().zip(weights) {
                if let Some(weight) = weight {
                    builder = builder.weight_at(day, weight);
                }
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }
            builder.build()
        })
}

fn arb_checkpoint() -> impl Strategy<Value = u32> {
    prop_oneof![Just(5u32), Just(10u32), Just(15u32), Just(20u32)]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: loss equals the rounded formula for any positive baseline
    #[test]
    fn prop_loss_matches_formula(initial in 0.1f64..100.0, current in 0.0f64..100.0) {
        let expected = round1((initial - current) / initial * 100.0);
        prop_assert_eq!(compute_weight_loss_pct(Some(initial), Some(current)), Some(expected));
    }

    /// Property: loss has at most one decimal
    #[test]
    fn prop_loss_one_decimal(initial in arb_weight(), current in arb_weight()) {
        let loss = compute_weight_loss_pct(Some(initial), Some(current)).unwrap();
        prop_assert!((loss * 10.0 - (loss * 10.0).round()).abs() < 1e-6);
    }

    /// Property: any absent argument gives an absent loss
    #[test]
    fn prop_absent_propagates(weight in arb_weight()) {
        prop_assert_eq!(compute_weight_loss_pct(None, Some(weight)), None);
        prop_assert_eq!(compute_weight_loss_pct(Some(weight), None), None);
    }

    /// Property: status is IDEAL exactly inside the inclusive band
    #[test]
    fn prop_status_partitions_band(loss in -5.0f64..20.0, day in arb_checkpoint()) {
        let range = ideal_range(day).unwrap();
        let status = classify_status(Some(loss), day).unwrap();
        let expected = if loss < range.min {
            WeightStatus::Low
        } else if loss > range.max {
            WeightStatus::High
        } else {
            WeightStatus::Ideal
        };
        prop_assert_eq!(status, expected);
    }

    /// Property: non-checkpoint days never classify
    #[test]
    fn prop_other_days_absent(loss in -5.0f64..20.0, day in 0u32..40) {
        prop_assume!(![5, 10, 15, 20].contains(&day));
        prop_assert_eq!(classify_status(Some(loss), day), None);
    }

    /// Property: CSV has one line per record plus header, 18 columns each
    #[test]
    fn prop_csv_shape(eggs in proptest::collection::vec(arb_egg(), 0..8)) {
        let text = export_csv(&eggs).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .from_reader(text.as_bytes());
        prop_assert_eq!(reader.headers().unwrap().len(), CSV_HEADER.len());
        let rows: Vec<_> = reader.records().map(Result::unwrap).collect();
        prop_assert_eq!(rows.len(), eggs.len());
        for (row, egg) in rows.iter().zip(&eggs) {
            prop_assert_eq!(row.len(), CSV_HEADER.len());
            prop_assert_eq!(&row[0], egg.id());
            prop_assert_eq!(&row[17], egg.notes().unwrap_or_default());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: persist then load yields the same collection, field for field
    #[test]
    fn prop_persist_load_roundtrip(eggs in proptest::collection::vec(arb_egg(), 0..10)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let mut store = EggStore::new(MemoryKvStore::new());
            store.load().await.unwrap();
            for egg in &eggs {
                store.add_record(egg.clone()).await.unwrap();
            }
            store.persist().await.unwrap();
            let expected = store.records().to_vec();

            let bytes = store.backend().get(store.key()).await.unwrap().unwrap();
            let replica = MemoryKvStore::new();
            replica.set(store.key(), bytes).await.unwrap();
            let mut reopened = EggStore::new(replica);
            let loaded = reopened.load().await.unwrap();

            assert_eq!(loaded, expected.as_slice());
            assert_eq!(&loaded[5..], eggs.as_slice());
        });
    }
}
