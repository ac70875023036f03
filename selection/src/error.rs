use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Scene contains no splats")]
    EmptyScene,

    #[error("Edit submission failed")]
    Edit(#[from] anyhow::Error),
}
