use async_trait::async_trait;
use glam::Vec3;

use crate::mask::MaskImage;
use crate::pose::{CameraMode, CameraPose};

/// Read-only view over the splat data store.
pub trait SplatStore {
    fn num_splats(&self) -> usize;
    fn means(&self) -> &[Vec3];
    /// Pre-activation opacities; effective opacity is `sigmoid(raw)`.
    fn raw_opacities(&self) -> &[f32];
}

/// What a selection mutation selects from.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionSource {
    /// Per-splat inclusion flags, same order as the store arrays.
    Flags(Vec<bool>),
    /// Screen-space mask to be projected onto the splats.
    Mask(MaskImage),
}

/// One selection mutation request. The sink applies each op atomically.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOp {
    Set(SelectionSource),
    Invert,
    Delete,
}

/// Edit-operation sink owning the selection state (and undo/redo, which is
/// out of scope here). Errors surface to the caller; no internal retries.
pub trait EditSink {
    fn submit(&mut self, op: SelectionOp) -> anyhow::Result<()>;
}

/// Camera pose and render-mode control.
pub trait CameraRig {
    fn pose(&self) -> CameraPose;
    fn set_pose(&mut self, pose: CameraPose);
    fn set_mode(&mut self, mode: CameraMode);
}

/// Off-screen frame capture at the current camera pose.
#[async_trait]
pub trait FrameCapture: Send {
    /// Raw RGBA frame bytes, `width * height * 4`.
    async fn capture(&mut self, width: u32, height: u32) -> anyhow::Result<Vec<u8>>;
}
