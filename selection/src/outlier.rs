use splat_cmn::{EditSink, SelectionOp, SelectionSource, SplatStore};
use tracing::debug;

use crate::error::Result;
use crate::grid::{DensityGrid, DEFAULT_RESOLUTION};

pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Operator-set thresholds, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierThresholds {
    pub opacity: f32,
    pub density: f32,
}

impl Default for OutlierThresholds {
    fn default() -> Self {
        Self {
            opacity: 0.2,
            density: 0.0,
        }
    }
}

/// Density/opacity outlier filter. A splat is flagged when either its
/// effective opacity or its normalized local density falls below the
/// matching threshold; low opacity and low density are independent
/// evidence of noise.
#[derive(Debug, Clone, Copy)]
pub struct OutlierFilter {
    pub thresholds: OutlierThresholds,
    pub resolution: usize,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        Self {
            thresholds: OutlierThresholds::default(),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl OutlierFilter {
    /// Per-splat inclusion flags. Rebuilds the bounding box and density
    /// grid from the store on every call.
    pub fn evaluate<S: SplatStore>(&self, store: &S) -> Result<Vec<bool>> {
        let grid = DensityGrid::build(store.means(), self.resolution)?;

        let flags = store
            .means()
            .iter()
            .zip(store.raw_opacities())
            .map(|(&mean, &raw)| {
                sigmoid(raw) < self.thresholds.opacity
                    || grid.normalized_density(mean) < self.thresholds.density
            })
            .collect();

        Ok(flags)
    }

    /// Evaluates the filter and replaces the current selection with the
    /// outlier set. Returns the number of flagged splats. On error the
    /// sink is never touched and the prior selection stands.
    pub fn apply<S: SplatStore, E: EditSink>(&self, store: &S, sink: &mut E) -> Result<usize> {
        let flags = self.evaluate(store)?;
        let selected = flags.iter().filter(|&&f| f).count();

        sink.submit(SelectionOp::Set(SelectionSource::Flags(flags)))?;
        debug!(
            selected,
            total = store.num_splats(),
            opacity = self.thresholds.opacity,
            density = self.thresholds.density,
            "outlier filter applied"
        );
        Ok(selected)
    }
}
