use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SegmentError>;

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("Segmentation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Segmentation service returned status {0}")]
    Status(StatusCode),

    #[error("Mask size mismatch: expected {expected} bytes, got {got}")]
    MaskSize { expected: usize, got: usize },

    #[error("Frame capture failed")]
    Capture(#[source] anyhow::Error),

    #[error("Edit submission failed")]
    Edit(#[source] anyhow::Error),

    /// Tool deactivated mid-run. Control flow, not an operator failure.
    #[error("Segmentation run cancelled")]
    Cancelled,
}
