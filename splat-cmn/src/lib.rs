pub mod mask;
pub mod pose;
pub mod rect;
pub mod services;
pub mod splats;

pub use mask::MaskImage;
pub use pose::{CameraMode, CameraPose};
pub use rect::Rect;
pub use services::{CameraRig, EditSink, FrameCapture, SelectionOp, SelectionSource, SplatStore};
pub use splats::RawSplats;
