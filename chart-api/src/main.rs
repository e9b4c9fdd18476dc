//! chart-api - read-only HTTP API over the scraped chart dataset
//!
//! Loads the dataset once at startup, then serves list, artist search and
//! rank lookup queries from memory. A missing or invalid dataset does not
//! block startup: the service runs with an empty chart.

use anyhow::{Context, Result};
use chart_common::config::DatasetPathResolver;
use chart_common::dataset;
use chart_api::api::buildinfo::BuildInfo;
use chart_api::{build_router, AppState};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for chart-api
#[derive(Parser, Debug)]
#[command(name = "chart-api")]
#[command(about = "Read-only HTTP API over the chart dataset")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "CHART_API_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "CHART_API_PORT")]
    port: u16,

    /// Dataset JSON file (overrides CHART_DATASET and config.toml)
    #[arg(short, long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chart_api=info,chart_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let build = BuildInfo::current();
    info!(
        "Starting chart-api v{} [{}] built {} ({})",
        build.version, build.git_hash, build.build_timestamp, build.build_profile
    );

    let args = Args::parse();

    let dataset_path = DatasetPathResolver::new().resolve_dataset(args.dataset.as_deref());
    info!("Dataset path: {}", dataset_path.display());

    // Loading finishes before the listener binds
    let snapshot = dataset::load(&dataset_path);
    info!("Chart snapshot ready: {} songs", snapshot.len());

    let state = AppState::new(snapshot);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", args.host, args.port))?;
    let addr: SocketAddr = listener.local_addr().context("Failed to read bound address")?;
    info!("chart-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
