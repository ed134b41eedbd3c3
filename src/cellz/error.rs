use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellzError {
    #[error("Notebook not found: {0}")]
    NotebookNotFound(PathBuf),

    #[error("Cell with id '{0}' not found")]
    CellNotFound(String),

    #[error("Cell ids not found: {0}")]
    CellsNotFound(String),

    #[error("Field '{0}' is not present on the cell")]
    FieldNotFound(String),

    #[error("Only the 'source' field can be updated, got '{0}'")]
    FieldNotEditable(String),

    #[error("Provide --content or --content-file")]
    ContentMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, CellzError>;
