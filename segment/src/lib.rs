mod client;
mod error;
mod orbit;
mod orchestrator;

pub use client::{MaskService, SegmentClient, DEFAULT_ENDPOINT};
pub use error::{Result, SegmentError};
pub use orbit::orbit_poses;
pub use orchestrator::{run_segmentation, SegmentRun};
