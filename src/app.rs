//! Application controller
//!
//! Owns the record store and the (optional) chart surface. Startup order is
//! fixed: load state, then bind a surface, which renders immediately. After
//! every mutation the derived series are rebuilt and rendered again.
//!
//! Rendering never fails the controller: surface errors are logged and the
//! store carries on.

use serde::Serialize;
use tracing::{debug, warn};

use crate::chart::{ChartData, RenderSurface};
use crate::kv::KvStore;
use crate::metrics::WeightStatus;
use crate::record::{CheckpointDay, EggField, EggRecord};
use crate::store::{CorruptStatePolicy, EggStore};
use crate::Result;

/// Loss and status at one checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointCell {
    /// Checkpoint
    pub day: CheckpointDay,
    /// Measured weight
    pub weight: Option<f64>,
    /// Loss percentage, one decimal
    pub loss_pct: Option<f64>,
    /// Classification
    pub status: Option<WeightStatus>,
}

/// One table row: a record plus its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow<'a> {
    /// Position in the collection (the index `update_field` takes)
    pub index: usize,
    /// The record
    pub egg: &'a EggRecord,
    /// Day 5, 10, 15, 20
    pub checkpoints: [CheckpointCell; 4],
}

impl<'a> TableRow<'a> {
    /// Derive the row for `egg` at `index`.
    #[must_use]
    pub fn new(index: usize, egg: &'a EggRecord) -> Self {
        let checkpoints = CheckpointDay::ALL.map(|day| CheckpointCell {
            day,
            weight: egg.weight_at(day),
            loss_pct: egg.loss_pct(day),
            status: egg.status(day),
        });
        Self { index, egg, checkpoints }
    }
}

/// Controller over an [`EggStore`] and an optional [`RenderSurface`].
pub struct App<S> {
    store: EggStore<S>,
    surface: Option<Box<dyn RenderSurface + Send>>,
}

impl<S: KvStore> App<S> {
    /// Load state from `backend` under `key`.
    ///
    /// # Errors
    ///
    /// Propagates [`EggStore::load`] errors.
    pub async fn open(backend: S, key: &str, policy: CorruptStatePolicy) -> Result<Self> {
        let mut store = EggStore::new(backend).with_key(key).with_policy(policy);
        store.load().await?;
        Ok(Self { store, surface: None })
    }

    /// Attach a surface and render the current state to it.
    pub fn bind_surface(&mut self, surface: Box<dyn RenderSurface + Send>) {
        self.surface = Some(surface);
        self.render();
    }

    /// Record store.
    #[must_use]
    pub const fn store(&self) -> &EggStore<S> {
        &self.store
    }

    /// Records in collection order.
    #[must_use]
    pub fn records(&self) -> &[EggRecord] {
        self.store.records()
    }

    /// Table rows with derived losses and statuses.
    #[must_use]
    pub fn rows(&self) -> Vec<TableRow<'_>> {
        self.records()
            .iter()
            .enumerate()
            .map(|(index, egg)| TableRow::new(index, egg))
            .collect()
    }

    /// Chart data for the current collection.
    #[must_use]
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_records(self.records())
    }

    /// Append a record, persist, re-render.
    ///
    /// # Errors
    ///
    /// [`Error::Persistence`](crate::Error::Persistence) if the write fails.
    /// The record is kept and the chart is still refreshed.
    pub async fn add_record(&mut self, record: EggRecord) -> Result<()> {
        let outcome = self.store.add_record(record).await.map(|_| ());
        self.render();
        outcome
    }

    /// Edit one field, persist, re-render.
    ///
    /// # Errors
    ///
    /// Index, field and persistence errors from [`EggStore::update_field`].
    pub async fn update_field(&mut self, index: usize, field: EggField, value: &str) -> Result<()> {
        let outcome = self.store.update_field(index, field, value).await.map(|_| ());
        self.render();
        outcome
    }

    /// Persist the current collection.
    ///
    /// # Errors
    ///
    /// [`Error::Persistence`](crate::Error::Persistence) if the write fails.
    pub async fn save(&self) -> Result<()> {
        self.store.persist().await
    }

    /// Return to seed data, dropping persisted state.
    ///
    /// # Errors
    ///
    /// Backend errors from the delete.
    pub async fn reset(&mut self) -> Result<()> {
        self.store.reset().await?;
        self.render();
        Ok(())
    }

    fn render(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("no surface bound, skipping render");
            return;
        };
        let data = ChartData::from_records(self.store.records());
        if let Err(e) = surface.render(&data) {
            warn!(error = %e, "chart render skipped");
        }
    }
}
