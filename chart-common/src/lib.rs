//! # Chart Common Library
//!
//! Shared code for the chart API and the chart scraper:
//! - Song model and the in-memory chart snapshot
//! - Dataset file loading and writing
//! - Dataset path resolution
//! - Common error types

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{ChartSnapshot, Song};
