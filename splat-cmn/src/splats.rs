use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::services::SplatStore;

/// In-memory splat arrays, one entry per splat.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RawSplats {
    pub means: Vec<Vec3>,
    pub raw_opacity: Vec<f32>,
}

impl RawSplats {
    pub fn new(means: Vec<Vec3>, raw_opacity: Vec<f32>) -> Self {
        assert_eq!(means.len(), raw_opacity.len());
        Self { means, raw_opacity }
    }
}

impl SplatStore for RawSplats {
    fn num_splats(&self) -> usize {
        self.means.len()
    }

    fn means(&self) -> &[Vec3] {
        &self.means
    }

    fn raw_opacities(&self) -> &[f32] {
        &self.raw_opacity
    }
}
