use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriftboardError>;

#[derive(Debug, Error)]
pub enum DriftboardError {
    #[error("Column title is required")]
    EmptyColumnTitle,

    #[error("Column title cannot exceed 100 characters")]
    ColumnTitleTooLong,

    #[error("Column with this title already exists")]
    DuplicateColumnTitle,

    #[error("Task description cannot be empty")]
    EmptyTaskDescription,

    #[error("Task description cannot exceed 500 characters")]
    TaskDescriptionTooLong,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
