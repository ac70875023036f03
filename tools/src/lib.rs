mod drag;
mod error;
mod filter_tool;
mod input;
mod segment_tool;

pub use drag::{DragController, DragMode, OverlayRect};
pub use error::{Result, ToolError};
pub use filter_tool::FilterTool;
pub use input::NumericField;
pub use segment_tool::SegmentTool;
