/// Error type shared by the controller, the capture trigger and the browser bridge
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("tab query failed: {0}")]
    Tabs(String),

    #[error("page info extraction failed: {0}")]
    Extraction(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
