//! chart-scraper library - offline chart scrape into the dataset file
//!
//! One run is a single fetch, a synchronous parse and at most one file
//! write. Failures end the run without touching the existing dataset.

use chart_common::{dataset, Song};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub mod error;
pub mod extract;
pub mod fetch;
pub mod query;

pub use error::{Result, ScrapeError};
pub use extract::{parse_chart, ChartLayout, UNKNOWN};
pub use fetch::ChartClient;

/// Melon TOP 100 chart page
pub const DEFAULT_CHART_URL: &str = "https://www.melon.com/chart/index.htm";

/// Fetch `url` and extract its chart rows
pub async fn scrape(client: &ChartClient, url: &str, layout: &ChartLayout) -> Result<Vec<Song>> {
    let html = client.fetch_page(url).await?;
    parse_chart(&html, layout)
}

/// Write scraped records to the dataset file at `path`
pub fn persist(records: &[Song], path: &Path) -> Result<()> {
    dataset::write(path, records)?;
    Ok(())
}

/// How a batch run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Dataset written with `count` songs
    Written { path: PathBuf, count: usize },
    /// Page parsed but held no rows; nothing written
    NothingExtracted,
}

/// Scrape `url` and persist the result to `output`
///
/// Persisting only happens when at least one record was extracted.
pub async fn run(client: &ChartClient, url: &str, output: &Path) -> Result<RunOutcome> {
    let records = match scrape(client, url, &ChartLayout::melon()).await {
        Ok(records) => records,
        Err(e) => {
            error!("Scrape of {} failed: {}", url, e);
            return Err(e);
        }
    };

    info!("Extracted {} songs", records.len());

    let Some(first) = records.first() else {
        warn!("No records extracted from {}; dataset left untouched", url);
        return Ok(RunOutcome::NothingExtracted);
    };
    info!("First entry: {:?}", first);

    if let Err(e) = persist(&records, output) {
        error!("Failed to save {}: {}", output.display(), e);
        return Err(e);
    }

    info!("Saved dataset: {}", output.display());
    Ok(RunOutcome::Written {
        path: output.to_path_buf(),
        count: records.len(),
    })
}
