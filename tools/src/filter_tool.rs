use selection::{OutlierFilter, OutlierThresholds};
use splat_cmn::{EditSink, SplatStore};
use tracing::info;

use crate::error::Result;
use crate::input::NumericField;

/// Statistical outlier selection tool. Holds the two threshold controls
/// and re-applies the full filter whenever either one effectively changes.
#[derive(Debug)]
pub struct FilterTool {
    opacity: NumericField,
    density: NumericField,
    resolution: usize,
    active: bool,
}

impl Default for FilterTool {
    fn default() -> Self {
        let defaults = OutlierThresholds::default();
        Self {
            opacity: NumericField::new(0.0, 1.0, 3, defaults.opacity),
            density: NumericField::new(0.0, 1.0, 3, defaults.density),
            resolution: selection::DEFAULT_RESOLUTION,
            active: false,
        }
    }
}

impl FilterTool {
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn opacity_threshold(&self) -> f32 {
        self.opacity.value()
    }

    pub fn density_threshold(&self) -> f32 {
        self.density.value()
    }

    /// Threshold change events. Each effective change triggers a full
    /// re-apply; returns the new outlier count, or `None` when the input
    /// did not change the stored value.
    pub fn set_opacity_threshold<S: SplatStore, E: EditSink>(
        &mut self,
        value: f32,
        store: &S,
        sink: &mut E,
    ) -> Result<Option<usize>> {
        if !self.opacity.set(value) {
            return Ok(None);
        }
        self.apply(store, sink).map(Some)
    }

    pub fn set_density_threshold<S: SplatStore, E: EditSink>(
        &mut self,
        value: f32,
        store: &S,
        sink: &mut E,
    ) -> Result<Option<usize>> {
        if !self.density.set(value) {
            return Ok(None);
        }
        self.apply(store, sink).map(Some)
    }

    /// Replaces the current selection with the outlier set.
    pub fn apply<S: SplatStore, E: EditSink>(&self, store: &S, sink: &mut E) -> Result<usize> {
        let filter = OutlierFilter {
            thresholds: OutlierThresholds {
                opacity: self.opacity.value(),
                density: self.density.value(),
            },
            resolution: self.resolution,
        };
        let selected = filter.apply(store, sink)?;
        info!(selected, "outlier selection updated");
        Ok(selected)
    }
}
