//! Render surfaces: where chart data ends up.

use std::path::PathBuf;

use tracing::debug;

use super::ChartData;
use crate::{Error, Result};

/// A rendering target for chart data.
///
/// Surfaces are bound explicitly once they exist; nothing polls or waits
/// for them.
pub trait RenderSurface {
    /// Draw (or redraw) `data`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSurface`] if the target is gone; other errors as the
    /// surface sees fit. Callers treat every error as non-fatal.
    fn render(&mut self, data: &ChartData) -> Result<()>;
}

/// Writes chart data as pretty JSON to a file for an external plotter.
#[derive(Debug, Clone)]
pub struct JsonFileSurface {
    path: PathBuf,
}

impl JsonFileSurface {
    /// Surface writing to `path`. The parent directory must already exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RenderSurface for JsonFileSurface {
    fn render(&mut self, data: &ChartData) -> Result<()> {
        let parent = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            if !dir.is_dir() {
                return Err(Error::MissingSurface(format!("{} does not exist", dir.display())));
            }
        }
        let json = serde_json::to_vec_pretty(data)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), series = data.eggs.len(), "chart data written");
        Ok(())
    }
}
