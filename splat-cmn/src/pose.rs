use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Same eye position, looking at the world origin.
    pub fn retargeted_to_origin(&self) -> Self {
        Self {
            position: self.position,
            target: Vec3::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Full splat rendering.
    Splats,
    /// Point-center rendering, used while picking so the captured frame
    /// matches what the segmentation service expects.
    Centers,
}
