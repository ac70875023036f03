use thiserror::Error;

pub type Result<T> = std::result::Result<T, ToolError>;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Selection(#[from] selection::SelectionError),

    #[error(transparent)]
    Segment(#[from] segment::SegmentError),
}
