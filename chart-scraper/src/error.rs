//! Error types for chart-scraper

use thiserror::Error;

/// Scrape run errors
///
/// Every variant ends the run; nothing is retried and no file is written.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0} from {1}")]
    Status(u16, String),

    #[error("Invalid selector {0:?}: {1}")]
    Selector(String, String),

    #[error("Row {row}: missing {field}")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row}: {field} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Failed to write dataset: {0}")]
    Persist(#[from] chart_common::Error),
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        ScrapeError::Network(e.to_string())
    }
}

/// Convenience Result type using ScrapeError
pub type Result<T> = std::result::Result<T, ScrapeError>;
