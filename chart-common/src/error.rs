//! Common error types for the chart service

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for chart operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the API and the scraper
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset file does not exist at the resolved path
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or does not match the song schema
    #[error("Dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
