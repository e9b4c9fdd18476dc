//! chart-scraper - one-shot scrape of the chart page into the dataset file

use anyhow::{bail, Context, Result};
use chart_common::config::DatasetPathResolver;
use chart_common::dataset::DEFAULT_DATASET_FILE;
use chart_scraper::{run, ChartClient, RunOutcome, DEFAULT_CHART_URL};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for chart-scraper
#[derive(Parser, Debug)]
#[command(name = "chart-scraper")]
#[command(about = "Scrape the chart page and write the dataset JSON")]
#[command(version)]
struct Args {
    /// Chart page to scrape
    #[arg(default_value = DEFAULT_CHART_URL)]
    url: String,

    /// Output file name, placed in the data directory
    #[arg(short, long, default_value = DEFAULT_DATASET_FILE)]
    output: PathBuf,

    /// Data directory (overrides CHART_DATA_DIR and config.toml)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting chart-scraper v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let data_dir = DatasetPathResolver::new().resolve_data_dir(args.data_dir.as_deref());
    // An absolute --output replaces the data directory entirely
    let output = data_dir.join(&args.output);
    info!("Scraping {} into {}", args.url, output.display());

    let client = ChartClient::new().context("Failed to create HTTP client")?;

    match run(&client, &args.url, &output)
        .await
        .context("Scrape run failed")?
    {
        RunOutcome::Written { count, .. } => {
            info!("Done: {} songs", count);
            Ok(())
        }
        RunOutcome::NothingExtracted => bail!("No records extracted from {}", args.url),
    }
}
